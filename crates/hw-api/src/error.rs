use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("metrics error: {0}")]
    Metrics(#[from] hw_prometheus::MetricsError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Metrics(e) => {
                error!(error = %e, "failed to build metrics response");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics error: {e}")).into_response()
            }
        }
    }
}
