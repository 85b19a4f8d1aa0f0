//! HTTP backend for the tornado dashboard.
//!
//! The query layer ([`query::TornadoQueries`]) runs the dashboard's fixed aggregate queries;
//! the routes expose each of them as JSON, alongside the dashboard pages.

pub mod error;
pub mod query;
pub mod routes;
pub mod state;
