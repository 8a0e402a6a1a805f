use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::error::GridError;
use crate::io::grid::{CellValue, RawGrid};

/// Read one worksheet into an untyped [`RawGrid`].
///
/// Cells are carried over verbatim: numbers stay numbers, text stays text,
/// blanks become [`CellValue::Empty`]. No header detection or type coercion
/// happens here; that is the extractor's job.
///
/// Fails with [`GridError::SourceUnavailable`] when the file cannot be opened
/// or the named sheet does not exist. The workbook handle is dropped on every
/// exit path.
pub fn load_grid(path: impl AsRef<Path>, sheet_name: &str) -> Result<RawGrid, GridError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        GridError::SourceUnavailable(format!("cannot open {}: {e}", path.display()))
    })?;

    if !workbook.sheet_names().iter().any(|n| n == sheet_name) {
        return Err(GridError::SourceUnavailable(format!(
            "no sheet named '{sheet_name}' in {}",
            path.display()
        )));
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| GridError::SourceUnavailable(format!("sheet '{sheet_name}': {e}")))?;

    // The range is trimmed to the used bounding box; pad it back out so
    // positions in the grid are absolute sheet coordinates.
    let (start_row, start_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col];
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }

    Ok(RawGrid::new(rows))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        // Dates surface as their serial number; the panel has no date column,
        // so any date cell will fail the extractor's filters downstream.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
