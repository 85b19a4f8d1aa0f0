//! A small SQL AST for the read-only aggregate queries, and its rendering to SQL strings.

pub mod sql;
