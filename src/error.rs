use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynchroError>;

/// Errors raised while loading datasets, profiling the audience or
/// rendering a report
#[derive(Debug, Error)]
pub enum SynchroError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Missing field '{column}' in row {row}")]
    MissingField { column: String, row: usize },

    #[error("Invalid value '{value}' for field '{column}' in row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SynchroError {
    pub fn missing_field(column: impl Into<String>, row: usize) -> Self {
        Self::MissingField {
            column: column.into(),
            row,
        }
    }

    pub fn invalid_value(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            column: column.into(),
            row,
            value: value.into(),
        }
    }
}
