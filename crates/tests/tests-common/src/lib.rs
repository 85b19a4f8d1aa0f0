//! Common functions used across test cases.

pub mod database;
pub mod router;
