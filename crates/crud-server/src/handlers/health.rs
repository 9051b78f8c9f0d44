//! Health check handler

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.service.health().await {
        Ok(status) => Ok(Json(json!(status))),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "mode": state.service.mode(),
                    "error": e.to_string(),
                })),
            ))
        }
    }
}
