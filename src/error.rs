use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("File is empty")]
    EmptyInput,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Amount column must contain numeric values")]
    NonNumericAmount,

    #[error("Unsupported file format: {0} (expected .csv, .xlsx, or .xls)")]
    UnsupportedFormat(String),

    #[error("File too large: {0} bytes (maximum is 10 MiB)")]
    OversizeUpload(u64),

    #[error("Remote fetch failed: {0}")]
    Transport(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
