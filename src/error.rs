use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlipperError>;

#[derive(Error, Debug)]
pub enum BlipperError {
    #[error("Unsupported metric: {0}")]
    UnsupportedMetric(String),
    #[error("Invalid numeric input for {field}: {value:?}")]
    InvalidNumericInput { field: String, value: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
