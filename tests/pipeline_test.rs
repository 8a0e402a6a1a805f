use std::path::{Path, PathBuf};

use assert_approx_eq::assert_approx_eq;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use grid_interconnect_analyzer::{
    analysis::compute_indicators,
    build_panel,
    error::GridError,
    extract::{extract_observations, PanelLayout},
    io::{load_grid, write_excel},
    AnalyzerConfig, StatusLabel,
};

/// Write a workbook shaped like the published source: title rows, the marker
/// header in column 2, country rows, then a blank row and footnotes.
fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("interconnectivity.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Figure_3.13").unwrap();

    sheet.write_string(0, 0, "Figure 3.13 Panel A").unwrap();
    sheet.write_string(1, 0, "Country").unwrap();
    sheet.write_string(1, 1, "ISO3").unwrap();
    sheet
        .write_string(1, 2, "Interconnectivity (%) of installed capacity")
        .unwrap();

    let rows: &[(&str, &str, f64)] = &[
        ("Austria", "AUT", 14.0),
        ("Belgium", "BEL", 21.0),
        ("Croatia", "HRV", 52.0),
        ("Malta", "MLT", 3.0),
        ("Poland", "POL", 7.5),
        ("Spain", "ESP", 7.4),
    ];
    for (i, (country, iso3, pct)) in rows.iter().enumerate() {
        let row = i as u32 + 2;
        sheet.write_string(row, 0, *country).unwrap();
        sheet.write_string(row, 1, *iso3).unwrap();
        sheet.write_number(row, 2, *pct).unwrap();
    }

    // Trailing junk the extractor has to prune
    sheet.write_string(9, 0, "Source: ENTSO-E").unwrap();
    sheet.write_string(9, 2, "provisional figures").unwrap();
    sheet.write_string(10, 0, "Note").unwrap();
    sheet.write_string(10, 2, "n/a").unwrap();

    workbook.save(&path).unwrap();
    path
}

fn fixture_config(path: &Path) -> AnalyzerConfig {
    AnalyzerConfig {
        source_path: path.to_path_buf(),
        ..AnalyzerConfig::default()
    }
}

#[test]
fn test_pipeline_builds_full_panel() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let panel = build_panel(&fixture_config(&path)).unwrap();

    assert_eq!(panel.len(), 6);
    assert_eq!(panel.target_pct, 15.0);
    let austria = panel.get("Austria").unwrap();
    assert_eq!(austria.iso3.as_deref(), Some("AUT"));
    assert_approx_eq!(austria.interconnectivity_pct, 14.0);
    assert_approx_eq!(austria.interconnection_gap_pctpt, 1.0);
}

#[test]
fn test_derived_fields_invariants_hold_for_all_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let panel = build_panel(&fixture_config(&path)).unwrap();

    for record in &panel.records {
        assert!(record.price_benefit_score >= 0.0);
        assert!(record.price_benefit_score <= 1.0);
        assert_eq!(
            record.price_benefit_score,
            record.integration_potential_index
        );
        assert!(record.interconnection_gap_pctpt >= 0.0);
        if record.interconnectivity_pct >= panel.target_pct {
            assert_eq!(record.interconnection_gap_pctpt, 0.0);
        }
        assert!(!record.ui_message.is_empty());
    }
}

#[test]
fn test_status_label_boundaries() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let panel = build_panel(&fixture_config(&path)).unwrap();

    assert_eq!(
        panel.get("Croatia").unwrap().status_label,
        StatusLabel::HighlyInterconnected
    );
    // Exactly at half the 15.0 target
    assert_eq!(
        panel.get("Poland").unwrap().status_label,
        StatusLabel::ModeratelyInterconnected
    );
    // Just below half the target
    assert_eq!(
        panel.get("Spain").unwrap().status_label,
        StatusLabel::GridConstrained
    );
}

#[test]
fn test_pipeline_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let config = fixture_config(&path);

    let first = build_panel(&config).unwrap();
    let second = build_panel(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_footnote_rows_excluded_without_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let panel = build_panel(&fixture_config(&path)).unwrap();

    assert!(panel.get("Source: ENTSO-E").is_none());
    assert!(panel.get("Note").is_none());
}

#[test]
fn test_marker_absent_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_marker.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Figure_3.13").unwrap();
    sheet.write_string(0, 0, "Country").unwrap();
    sheet.write_string(0, 2, "share of capacity").unwrap();
    sheet.write_string(1, 0, "Austria").unwrap();
    sheet.write_number(1, 2, 14.0).unwrap();
    workbook.save(&path).unwrap();

    let err = build_panel(&fixture_config(&path)).unwrap_err();
    assert!(matches!(err, GridError::MarkerNotFound { .. }));
}

#[test]
fn test_missing_sheet_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let config = AnalyzerConfig {
        source_path: path,
        sheet_name: "Figure_9.99".to_string(),
        ..AnalyzerConfig::default()
    };
    let err = build_panel(&config).unwrap_err();
    assert!(matches!(err, GridError::SourceUnavailable(_)));
    assert!(err.to_string().contains("Figure_9.99"));
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let config = AnalyzerConfig {
        source_path: PathBuf::from("nowhere/interconnectivity.xlsx"),
        ..AnalyzerConfig::default()
    };
    let err = build_panel(&config).unwrap_err();
    assert!(matches!(err, GridError::SourceUnavailable(_)));
}

#[test]
fn test_custom_target_shifts_labels() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let config = AnalyzerConfig {
        source_path: path,
        target_pct: 10.0,
        ..AnalyzerConfig::default()
    };
    let panel = build_panel(&config).unwrap();

    // Austria at 14.0 clears a 10.0 target
    assert_eq!(
        panel.get("Austria").unwrap().status_label,
        StatusLabel::HighlyInterconnected
    );
    assert_approx_eq!(
        panel.get("Malta").unwrap().price_benefit_score,
        7.0 / 10.0
    );
}

#[test]
fn test_exported_panel_is_itself_extractable() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let panel = build_panel(&fixture_config(&path)).unwrap();

    // The export's column-2 header reads "interconnectivity_pct", so the
    // default layout finds its marker and the numeric rows below it.
    let export_path = dir.path().join("derived.xlsx");
    write_excel(&panel, &export_path).unwrap();

    let grid = load_grid(&export_path, "Sheet1").unwrap();
    let observations = extract_observations(&grid, &PanelLayout::default()).unwrap();
    assert_eq!(observations.len(), panel.len());

    let recomputed = compute_indicators(observations, panel.target_pct);
    for (a, b) in panel.records.iter().zip(recomputed.records.iter()) {
        assert_eq!(a.country, b.country);
        assert_approx_eq!(a.interconnectivity_pct, b.interconnectivity_pct);
        assert_eq!(a.status_label, b.status_label);
    }
}

#[test]
fn test_panel_deep_in_sheet_keeps_absolute_positions() {
    // Leading rows are entirely empty; cell positions must stay absolute
    // even though the stored worksheet range starts at the first used cell.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("offset.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Figure_3.13").unwrap();
    sheet.write_string(5, 2, "interconnectivity (%)").unwrap();
    sheet.write_string(6, 0, "Austria").unwrap();
    sheet.write_string(6, 1, "AUT").unwrap();
    sheet.write_number(6, 2, 14.0).unwrap();
    workbook.save(&path).unwrap();

    let panel = build_panel(&fixture_config(&path)).unwrap();
    assert_eq!(panel.len(), 1);
    assert_eq!(panel.get("Austria").unwrap().iso3.as_deref(), Some("AUT"));
}

#[test]
fn test_numeric_text_cells_survive_extraction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("text_numbers.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Figure_3.13").unwrap();
    sheet.write_string(0, 2, "interconnectivity").unwrap();
    sheet.write_string(1, 0, "Austria").unwrap();
    sheet.write_string(1, 1, "AUT").unwrap();
    sheet.write_string(1, 2, "14.0").unwrap();
    workbook.save(&path).unwrap();

    let panel = build_panel(&fixture_config(&path)).unwrap();
    assert_eq!(panel.len(), 1);
    assert_approx_eq!(
        panel.get("Austria").unwrap().interconnectivity_pct,
        14.0
    );
}
