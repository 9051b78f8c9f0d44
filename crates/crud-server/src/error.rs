//! API error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crud_core::{CrudError, Table};
use serde_json::json;

/// Error body returned to the admin UI
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Set on delete failures so the body still carries `success`
    pub success: Option<bool>,
}

impl ApiError {
    pub fn not_found(table: &str) -> Self {
        let label = table
            .parse::<Table>()
            .map(|t| t.label().to_string())
            .unwrap_or_else(|_| table.to_string());
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{} not found", label),
            success: None,
        }
    }

    /// Map a service failure for `verb` on `noun`, e.g. "Failed to fetch posts"
    pub fn failed(verb: &str, noun: &str, err: CrudError) -> Self {
        if let CrudError::InvalidPayload { table, message } = &err {
            tracing::warn!("Rejected {} payload: {}", table, message);
            return Self {
                status: StatusCode::BAD_REQUEST,
                message: format!("Invalid {} payload: {}", table, message),
                success: None,
            };
        }

        tracing::error!("Failed to {} {}: {}", verb, noun, err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Failed to {} {}", verb, noun),
            success: None,
        }
    }

    /// Request body that never became JSON: malformed, or sent without a
    /// JSON content type
    pub fn bad_body(table: &str, rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!("Rejected {} body: {}", table, message);
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid {} payload: {}", noun(table, false), message),
            success: None,
        }
    }

    pub fn with_success(mut self, success: bool) -> Self {
        self.success = Some(success);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.success {
            Some(success) => json!({ "error": self.message, "success": success }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Lowercase noun for messages; unknown tags are echoed back
pub fn noun(table: &str, plural: bool) -> String {
    match table.parse::<Table>() {
        Ok(t) if plural => t.plural().to_string(),
        Ok(t) => t.as_str().to_string(),
        Err(_) => table.to_string(),
    }
}
