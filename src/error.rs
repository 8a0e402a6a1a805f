use thiserror::Error;

/// Errors that can occur while building or exporting the interconnectivity panel.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("marker '{marker}' not found in column {column}")]
    MarkerNotFound { marker: String, column: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),
}

impl From<calamine::Error> for GridError {
    fn from(e: calamine::Error) -> Self {
        GridError::Excel(e.to_string())
    }
}

impl From<calamine::XlsxError> for GridError {
    fn from(e: calamine::XlsxError) -> Self {
        GridError::Excel(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for GridError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        GridError::Excel(e.to_string())
    }
}
