//! Query execution against a SQLite database.

pub mod database_info;
pub mod error;
pub mod metrics;
pub mod query;
pub mod rows;
