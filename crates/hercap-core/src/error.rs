use thiserror::Error;

/// Validation and contract errors exposed by `hercap-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("company name cannot be empty")]
    EmptyName,
    #[error("duplicate company name '{name}'")]
    DuplicateName { name: String },

    #[error("headquarters must be '<City/Region>, <Country>' with exactly one ', ': '{value}'")]
    MalformedHeadquarters { value: String },

    #[error("founded year {year} outside {min}..={max}")]
    FoundedYearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("market cap range min {min} exceeds max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("dataset name cannot be empty")]
    EmptyDataset,
}

/// A compiled-in record violates a dataset invariant.
///
/// Raised while the record store is loading; never recoverable.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("malformed record #{index} ('{name}'): {source}")]
pub struct MalformedRecordError {
    pub index: usize,
    pub name: String,
    #[source]
    pub source: ValidationError,
}

/// An aggregate was requested over a view with no records.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot summarize an empty view")]
pub struct EmptyViewError;

/// Failures while writing or reading the CSV export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("export buffer is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("export row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),

    #[error(transparent)]
    EmptyView(#[from] EmptyViewError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
