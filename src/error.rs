use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid timestamp '{value}' on line {line}: {source}")]
    Timestamp {
        line: u64,
        value: String,
        source: chrono::ParseError,
    },
    #[error("Invalid decimal '{value}' on line {line}: {source}")]
    Amount {
        line: u64,
        value: String,
        source: rust_decimal::Error,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
