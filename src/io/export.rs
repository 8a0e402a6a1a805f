use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::GridError;
use crate::models::{CountryRecord, Panel};

/// Flat row shape used for tabular export; the status label goes out as its
/// display string rather than the enum variant name.
#[derive(Debug, serde::Serialize)]
struct PanelRow<'a> {
    country: &'a str,
    iso3: Option<&'a str>,
    interconnectivity_pct: f64,
    interconnection_gap_pctpt: f64,
    price_benefit_score: f64,
    integration_potential_index: f64,
    status_label: String,
    ui_message: &'a str,
}

impl<'a> PanelRow<'a> {
    fn from_record(record: &'a CountryRecord) -> Self {
        Self {
            country: &record.country,
            iso3: record.iso3.as_deref(),
            interconnectivity_pct: record.interconnectivity_pct,
            interconnection_gap_pctpt: record.interconnection_gap_pctpt,
            price_benefit_score: record.price_benefit_score,
            integration_potential_index: record.integration_potential_index,
            status_label: record.status_label.to_string(),
            ui_message: &record.ui_message,
        }
    }
}

/// Write the derived panel to a CSV file.
pub fn write_csv(panel: &Panel, path: impl AsRef<Path>) -> Result<(), GridError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for record in &panel.records {
        wtr.serialize(PanelRow::from_record(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the derived panel to a JSON file.
pub fn write_json(panel: &Panel, path: impl AsRef<Path>, pretty: bool) -> Result<(), GridError> {
    let file = std::fs::File::create(path.as_ref())?;
    if pretty {
        serde_json::to_writer_pretty(file, panel)?;
    } else {
        serde_json::to_writer(file, panel)?;
    }
    Ok(())
}

/// Write the derived panel to an Excel (.xlsx) file, one sheet, header row
/// plus one row per record.
pub fn write_excel(panel: &Panel, path: impl AsRef<Path>) -> Result<(), GridError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "country",
        "iso3",
        "interconnectivity_pct",
        "interconnection_gap_pctpt",
        "price_benefit_score",
        "integration_potential_index",
        "status_label",
        "ui_message",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (idx, record) in panel.records.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, 0, &record.country)?;
        if let Some(iso3) = &record.iso3 {
            worksheet.write_string(row, 1, iso3)?;
        }
        worksheet.write_number(row, 2, record.interconnectivity_pct)?;
        worksheet.write_number(row, 3, record.interconnection_gap_pctpt)?;
        worksheet.write_number(row, 4, record.price_benefit_score)?;
        worksheet.write_number(row, 5, record.integration_potential_index)?;
        worksheet.write_string(row, 6, record.status_label.to_string())?;
        worksheet.write_string(row, 7, &record.ui_message)?;
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

/// Trait seam for writing the derived panel in a chosen format.
pub trait PanelWriter {
    fn write(&self, panel: &Panel, path: &Path) -> Result<(), GridError>;
}

/// CSV format writer.
pub struct CsvFormat;

impl PanelWriter for CsvFormat {
    fn write(&self, panel: &Panel, path: &Path) -> Result<(), GridError> {
        write_csv(panel, path)
    }
}

/// JSON format writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl PanelWriter for JsonFormat {
    fn write(&self, panel: &Panel, path: &Path) -> Result<(), GridError> {
        write_json(panel, path, self.pretty)
    }
}

/// Excel (.xlsx) format writer.
pub struct ExcelFormat;

impl PanelWriter for ExcelFormat {
    fn write(&self, panel: &Panel, path: &Path) -> Result<(), GridError> {
        write_excel(panel, path)
    }
}
