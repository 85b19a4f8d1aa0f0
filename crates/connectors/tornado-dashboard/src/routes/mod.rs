//! The HTTP surface of the dashboard.

mod api;
mod health;
mod metrics;
mod pages;

use axum::http::{header, HeaderName, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Every data endpoint lives under this prefix.
pub const API_PREFIX: &str = "/api/v1.0";

/// Build the router serving the dashboard pages, their static assets, the data endpoints and
/// the operational endpoints.
///
/// Every response, errors included, is marked as uncacheable.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.pages.static_dir);

    Router::new()
        .merge(pages::router())
        .nest(API_PREFIX, api::router())
        .route("/health", get(health::get_health))
        .route("/metrics", get(metrics::get_metrics))
        .nest_service("/static", static_files)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-ua-compatible"),
            HeaderValue::from_static("IE=Edge,chrome=1"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
