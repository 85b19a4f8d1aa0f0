//! Metadata about the dataset the dashboard reads from.

pub mod metadata;
