use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::extract::PanelLayout;

/// Runtime configuration: where the workbook lives, where the panel sits
/// inside it, and the policy target the indicators are measured against.
///
/// Every field has a default matching the published source workbook, so an
/// empty config file (or none at all) is valid. CLI flags override single
/// fields on top of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Filesystem location of the source workbook
    pub source_path: PathBuf,
    /// Worksheet holding the interconnectivity panel
    pub sheet_name: String,
    /// Column scanned for the header marker
    pub marker_column: usize,
    /// Case-insensitive substring identifying the header row
    pub marker_text: String,
    pub country_column: usize,
    pub iso3_column: usize,
    pub value_column: usize,
    /// Reference interconnectivity percentage for gap and score
    pub target_pct: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("data/interconnectivity.xlsx"),
            sheet_name: "Figure_3.13".to_string(),
            marker_column: 2,
            marker_text: "interconnectivity".to_string(),
            country_column: 0,
            iso3_column: 1,
            value_column: 2,
            target_pct: 15.0,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file. Unknown keys are rejected.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self =
            toml::from_str(&text).map_err(|e| GridError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if !self.target_pct.is_finite() || self.target_pct <= 0.0 {
            return Err(GridError::Config(format!(
                "target_pct must be a positive number, got {}",
                self.target_pct
            )));
        }
        if self.marker_text.is_empty() {
            return Err(GridError::Config("marker_text must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn layout(&self) -> PanelLayout {
        PanelLayout {
            marker_column: self.marker_column,
            marker_text: self.marker_text.clone(),
            country_column: self.country_column,
            iso3_column: self.iso3_column,
            value_column: self.value_column,
        }
    }
}
