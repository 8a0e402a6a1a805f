use crate::analysis::PanelSummary;
use crate::models::Panel;

/// Shared application state: the panel built at startup plus its aggregates.
///
/// Both are immutable for the lifetime of the server, so no locking is
/// needed; actix clones the `Data` handle per worker.
pub struct AppState {
    pub panel: Panel,
    pub summary: PanelSummary,
}

impl AppState {
    pub fn new(panel: Panel) -> Self {
        let summary = PanelSummary::from_panel(&panel);
        Self { panel, summary }
    }
}
