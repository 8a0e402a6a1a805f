mod indicators;
mod summary;

pub use indicators::compute_indicators;
pub use summary::PanelSummary;
