use thiserror::Error;

/// Validation errors for indicator records and user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("Weight must be between 0 and 100, got {0}")]
    InvalidWeight(i64),

    #[error("Invalid numeric format: {0:?}")]
    InvalidNumericFormat(String),

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Duplicate indicator id: {0}")]
    DuplicateId(String),

    #[error("Failed to read catalog: {0}")]
    CatalogUnreadable(String),
}
