mod grid;
mod excel;
mod export;

pub use grid::{CellValue, RawGrid};
pub use excel::load_grid;
pub use export::{write_csv, write_excel, write_json, CsvFormat, ExcelFormat, JsonFormat, PanelWriter};
