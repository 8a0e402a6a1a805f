use serde::{Deserialize, Serialize};

use crate::models::{Panel, StatusLabel};

/// Panel-level aggregates for the quick summary views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSummary {
    pub num_countries: usize,
    pub target_pct: f64,
    pub mean_pct: f64,
    pub min_pct: f64,
    pub max_pct: f64,
    pub mean_gap_pctpt: f64,
    pub highly_interconnected: usize,
    pub moderately_interconnected: usize,
    pub grid_constrained: usize,
}

impl PanelSummary {
    pub fn from_panel(panel: &Panel) -> Self {
        let n = panel.len();
        if n == 0 {
            return Self {
                num_countries: 0,
                target_pct: panel.target_pct,
                mean_pct: 0.0,
                min_pct: 0.0,
                max_pct: 0.0,
                mean_gap_pctpt: 0.0,
                highly_interconnected: 0,
                moderately_interconnected: 0,
                grid_constrained: 0,
            };
        }

        let sum_pct: f64 = panel.records.iter().map(|r| r.interconnectivity_pct).sum();
        let sum_gap: f64 = panel
            .records
            .iter()
            .map(|r| r.interconnection_gap_pctpt)
            .sum();
        let min_pct = panel
            .records
            .iter()
            .map(|r| r.interconnectivity_pct)
            .fold(f64::INFINITY, f64::min);
        let max_pct = panel
            .records
            .iter()
            .map(|r| r.interconnectivity_pct)
            .fold(f64::NEG_INFINITY, f64::max);

        let count_label = |label: StatusLabel| {
            panel
                .records
                .iter()
                .filter(|r| r.status_label == label)
                .count()
        };

        Self {
            num_countries: n,
            target_pct: panel.target_pct,
            mean_pct: sum_pct / n as f64,
            min_pct,
            max_pct,
            mean_gap_pctpt: sum_gap / n as f64,
            highly_interconnected: count_label(StatusLabel::HighlyInterconnected),
            moderately_interconnected: count_label(StatusLabel::ModeratelyInterconnected),
            grid_constrained: count_label(StatusLabel::GridConstrained),
        }
    }
}
