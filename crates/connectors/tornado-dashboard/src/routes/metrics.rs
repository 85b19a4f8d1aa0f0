use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use prometheus::{Encoder, TextEncoder};

use query_engine_execution::metrics::update_pool_metrics;

use crate::error::ServerError;
use crate::state::AppState;

/// Prometheus text exposition of every registered metric.
pub(super) async fn get_metrics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServerError> {
    update_pool_metrics(state.queries.pool(), state.queries.metrics());

    let encoder = TextEncoder::new();
    let mut buffer = vec![];
    encoder
        .encode(&state.metrics_registry.gather(), &mut buffer)
        .map_err(|error| ServerError::Internal(format!("unable to encode metrics: {error}")))?;

    Ok((
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    ))
}
