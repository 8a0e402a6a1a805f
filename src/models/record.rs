use serde::{Deserialize, Serialize};

/// Traffic-light classification of a country's grid interconnectivity
/// relative to the policy target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLabel {
    #[serde(rename = "Highly interconnected")]
    HighlyInterconnected,
    #[serde(rename = "Moderately interconnected")]
    ModeratelyInterconnected,
    #[serde(rename = "Grid-constrained / high integration upside")]
    GridConstrained,
}

impl StatusLabel {
    /// Classify an interconnectivity percentage against a target.
    ///
    /// Both thresholds are inclusive: a value exactly at the target is
    /// highly interconnected, a value exactly at half the target is
    /// moderately interconnected.
    pub fn classify(interconnectivity_pct: f64, target_pct: f64) -> Self {
        if interconnectivity_pct >= target_pct {
            StatusLabel::HighlyInterconnected
        } else if interconnectivity_pct >= 0.5 * target_pct {
            StatusLabel::ModeratelyInterconnected
        } else {
            StatusLabel::GridConstrained
        }
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLabel::HighlyInterconnected => write!(f, "Highly interconnected"),
            StatusLabel::ModeratelyInterconnected => write!(f, "Moderately interconnected"),
            StatusLabel::GridConstrained => {
                write!(f, "Grid-constrained / high integration upside")
            }
        }
    }
}

impl std::str::FromStr for StatusLabel {
    type Err = crate::error::GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "highly interconnected" => Ok(StatusLabel::HighlyInterconnected),
            "moderately interconnected" => Ok(StatusLabel::ModeratelyInterconnected),
            "grid-constrained / high integration upside" | "grid-constrained" => {
                Ok(StatusLabel::GridConstrained)
            }
            _ => Err(crate::error::GridError::Config(format!(
                "unknown status label: '{s}'"
            ))),
        }
    }
}

/// One cleaned row of the source panel, before indicators are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryObservation {
    /// Country name as it appears in the sheet
    pub country: String,
    /// ISO 3166-1 alpha-3 code, when the sheet provides one
    pub iso3: Option<String>,
    /// Share of installed capacity interconnected with neighbors, in percent
    pub interconnectivity_pct: f64,
}

/// A country row with all derived indicator fields populated.
///
/// Records only exist in this form; there is no partially-derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub iso3: Option<String>,
    pub interconnectivity_pct: f64,
    /// Shortfall to the target in percentage points, floored at zero
    pub interconnection_gap_pctpt: f64,
    /// Normalized gap in [0, 1]
    pub price_benefit_score: f64,
    /// Currently defined identically to the price-benefit score, but carries
    /// its own domain meaning and is kept as a separate field
    pub integration_potential_index: f64,
    pub status_label: StatusLabel,
    /// Preformatted narrative sentence for display surfaces
    pub ui_message: String,
}
