use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::state::AppState;

// GET /bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let bookings = state.recorder.list().map_err(|e| {
        tracing::error!(error = %e, "failed to read bookings");
        AppError::Bookings(e)
    })?;

    let empty = bookings.is_empty();
    let mut body = serde_json::json!({
        "total": bookings.len(),
        "bookings": bookings,
    });
    if empty {
        body["message"] = "No bookings found".into();
    }
    Ok(Json(body))
}
