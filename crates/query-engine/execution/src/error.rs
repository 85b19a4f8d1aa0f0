//! Errors raised while talking to the database.

/// Data-access errors. None of them are recoverable by the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    DB(#[from] sqlx::Error),
    #[error("table '{table}' is missing columns: {}", missing.join(", "))]
    SchemaMismatch { table: String, missing: Vec<String> },
}
