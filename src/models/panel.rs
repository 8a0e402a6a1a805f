use serde::{Deserialize, Serialize};

use super::CountryRecord;

/// The derived per-country table both presentation front-ends read from.
///
/// Built once at startup by the indicator engine and never mutated
/// afterwards. Row order follows the source sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Target the indicators were computed against, in percentage points
    pub target_pct: f64,
    pub records: Vec<CountryRecord>,
}

impl Panel {
    pub fn new(target_pct: f64, records: Vec<CountryRecord>) -> Self {
        Self {
            target_pct,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record matching the country name exactly.
    ///
    /// Country names are unique in practice but not enforced; on duplicates
    /// the earliest row wins.
    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.country == country)
    }

    /// Sorted, deduplicated country names for the selection front-ends.
    pub fn country_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.country.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusLabel;

    fn make_record(country: &str, pct: f64) -> CountryRecord {
        CountryRecord {
            country: country.to_string(),
            iso3: None,
            interconnectivity_pct: pct,
            interconnection_gap_pctpt: (15.0 - pct).max(0.0),
            price_benefit_score: ((15.0 - pct).max(0.0) / 15.0).clamp(0.0, 1.0),
            integration_potential_index: ((15.0 - pct).max(0.0) / 15.0).clamp(0.0, 1.0),
            status_label: StatusLabel::classify(pct, 15.0),
            ui_message: String::new(),
        }
    }

    fn sample_panel() -> Panel {
        Panel::new(
            15.0,
            vec![
                make_record("Croatia", 52.0),
                make_record("Austria", 14.0),
                make_record("Belgium", 21.0),
            ],
        )
    }

    #[test]
    fn test_len_and_is_empty() {
        let panel = sample_panel();
        assert_eq!(panel.len(), 3);
        assert!(!panel.is_empty());
        assert!(Panel::new(15.0, vec![]).is_empty());
    }

    #[test]
    fn test_get_existing() {
        let panel = sample_panel();
        let record = panel.get("Belgium").unwrap();
        assert_eq!(record.interconnectivity_pct, 21.0);
    }

    #[test]
    fn test_get_missing() {
        assert!(sample_panel().get("Atlantis").is_none());
    }

    #[test]
    fn test_get_is_exact_match() {
        assert!(sample_panel().get("belgium").is_none());
    }

    #[test]
    fn test_country_names_sorted() {
        let names = sample_panel().country_names();
        assert_eq!(names, vec!["Austria", "Belgium", "Croatia"]);
    }

    #[test]
    fn test_country_names_deduplicated() {
        let mut panel = sample_panel();
        panel.records.push(make_record("Austria", 14.0));
        let names = panel.country_names();
        assert_eq!(names.iter().filter(|n| *n == "Austria").count(), 1);
    }

    #[test]
    fn test_get_duplicate_returns_first() {
        let panel = Panel::new(
            15.0,
            vec![make_record("Austria", 14.0), make_record("Austria", 3.0)],
        );
        assert_eq!(panel.get("Austria").unwrap().interconnectivity_pct, 14.0);
    }

    #[test]
    fn test_panel_json_roundtrip() {
        let panel = sample_panel();
        let json = serde_json::to_string(&panel).unwrap();
        let back: Panel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, panel);
    }
}
