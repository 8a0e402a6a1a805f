use tracing::info;

use crate::analysis::compute_indicators;
use crate::config::AnalyzerConfig;
use crate::error::GridError;
use crate::extract::extract_observations;
use crate::io::load_grid;
use crate::models::Panel;

/// Run the whole pipeline: load the worksheet, slice the panel out of it,
/// derive the indicators. This is the single construction point for [`Panel`];
/// every presenter receives the finished value by reference.
pub fn build_panel(config: &AnalyzerConfig) -> Result<Panel, GridError> {
    config.validate()?;

    let grid = load_grid(&config.source_path, &config.sheet_name)?;
    info!(
        rows = grid.num_rows(),
        sheet = %config.sheet_name,
        "worksheet loaded"
    );

    let observations = extract_observations(&grid, &config.layout())?;
    info!(countries = observations.len(), "panel extracted");

    Ok(compute_indicators(observations, config.target_pct))
}
