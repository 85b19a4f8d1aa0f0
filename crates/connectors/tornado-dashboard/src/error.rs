use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::query::QueryError;

/// Everything a request can fail with. All of it is reported as an internal server error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    Query(#[from] QueryError),
    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
    #[error("{0}")]
    Internal(String),
}

/// The message sent to clients. The cause only goes to the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Serialize)]
struct JsonErrorResponse {
    message: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        tracing::error!(%status, error = %self, "returning error");
        (
            status,
            Json(JsonErrorResponse {
                message: INTERNAL_ERROR_MESSAGE,
            }),
        )
            .into_response()
    }
}
