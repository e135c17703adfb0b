use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::dialogue::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{0}")]
    BadRequest(String),

    #[error("session store error: {0}")]
    Sessions(anyhow::Error),

    #[error("Failed to read bookings: {0}")]
    Bookings(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Engine(EngineError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Engine(EngineError::Unreachable) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Sessions(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Bookings(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::Engine(EngineError::Upstream { body, .. }) => serde_json::json!({
                "error": "Failed to get response from chatbot",
                "details": body,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
