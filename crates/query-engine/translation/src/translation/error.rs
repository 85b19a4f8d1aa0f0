//! Errors for query translation.

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Column '{column}' not found in table '{table}'.")]
    ColumnNotFound { table: String, column: String },
}
