use tracing::debug;

use crate::error::GridError;
use crate::io::{CellValue, RawGrid};
use crate::models::CountryObservation;

/// Where the country panel sits inside the worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    /// Column scanned for the header marker
    pub marker_column: usize,
    /// Case-insensitive substring identifying the header row
    pub marker_text: String,
    pub country_column: usize,
    pub iso3_column: usize,
    pub value_column: usize,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            marker_column: 2,
            marker_text: "interconnectivity".to_string(),
            country_column: 0,
            iso3_column: 1,
            value_column: 2,
        }
    }
}

/// Slice the country panel out of a raw worksheet grid.
///
/// Scans the marker column top-to-bottom for the first cell containing the
/// marker text (case-insensitive); the data region is everything below that
/// row, to the end of the grid. Rows are kept only if they carry a non-empty
/// country cell and a value cell that coerces to a finite number. There is no
/// end-of-table marker: trailing footnotes and source notes are pruned by the
/// numeric filter, so that filter is load-bearing.
pub fn extract_observations(
    grid: &RawGrid,
    layout: &PanelLayout,
) -> Result<Vec<CountryObservation>, GridError> {
    let marker_row = find_marker_row(grid, layout)?;

    let mut observations = Vec::new();
    for row in (marker_row + 1)..grid.num_rows() {
        let country_cell = grid.cell(row, layout.country_column);
        let value_cell = grid.cell(row, layout.value_column);

        // First pass: structural blanks. Rows missing either required cell
        // are expected (spacer rows, panel gutters) and dropped silently.
        let (country_cell, value_cell) = match (country_cell, value_cell) {
            (Some(c), Some(v)) if !c.is_empty() && !v.is_empty() => (c, v),
            _ => continue,
        };

        let country = country_cell.display_text().trim().to_string();
        if country.is_empty() {
            continue;
        }

        // Second pass: numeric coercion. Anything that does not parse as a
        // finite number is junk below the table (footnotes, source lines).
        let pct = match coerce_number(value_cell) {
            Some(p) => p,
            None => {
                debug!(
                    row,
                    value = %value_cell,
                    "dropping row: value does not coerce to a number"
                );
                continue;
            }
        };

        let iso3 = grid
            .cell(row, layout.iso3_column)
            .map(|c| c.display_text().trim().to_string())
            .filter(|s| !s.is_empty());

        observations.push(CountryObservation {
            country,
            iso3,
            interconnectivity_pct: pct,
        });
    }

    Ok(observations)
}

fn find_marker_row(grid: &RawGrid, layout: &PanelLayout) -> Result<usize, GridError> {
    let needle = layout.marker_text.to_lowercase();
    (0..grid.num_rows())
        .find(|&row| {
            grid.cell(row, layout.marker_column)
                .map(|c| c.display_text().to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .ok_or_else(|| GridError::MarkerNotFound {
            marker: layout.marker_text.clone(),
            column: layout.marker_column,
        })
}

/// Best-effort numeric coercion of a cell. Numbers pass through, text is
/// trimmed and parsed with a trailing percent sign tolerated. Non-finite
/// results count as failures so "NaN" text cannot sneak into the panel.
fn coerce_number(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        CellValue::Empty | CellValue::Bool(_) => None,
    };
    value.filter(|v| v.is_finite())
}
