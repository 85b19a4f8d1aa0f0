use axum::extract::State;
use axum::http::StatusCode;

use crate::error::ServerError;
use crate::state::AppState;

pub(super) async fn get_health(State(state): State<AppState>) -> Result<StatusCode, ServerError> {
    state.queries.health_check().await?;
    Ok(StatusCode::NO_CONTENT)
}
