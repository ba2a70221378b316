use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

use medscore_core::ScoreError;

/// Unified API error for all route handlers, rendered as the
/// `{"error", "message", "details"}` envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
    details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    details: Value,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            kind: "not_found",
            message: message.into(),
            details: json!({}),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(kind = self.kind, "internal error: {}", self.message);
        }

        let message = if self.status.is_server_error() {
            // Never leak internals to the caller.
            "internal server error".to_string()
        } else {
            self.message
        };

        let body = ErrorBody {
            error: self.kind,
            message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ScoreError> for ApiError {
    fn from(e: ScoreError) -> Self {
        match e {
            ScoreError::Validation {
                ref field,
                ref constraint,
                ..
            } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                kind: "validation_error",
                details: json!({ "field": field, "constraint": constraint }),
                message: e.to_string(),
            },
            ScoreError::CrossField { ref fields, .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                kind: "validation_error",
                details: json!({ "fields": fields }),
                message: e.to_string(),
            },
            ScoreError::BandGap { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "calculation_error",
                details: json!({}),
                message: e.to_string(),
            },
            ScoreError::UnknownCalculator(ref id) => {
                Self::not_found(format!("unknown calculator: {id}"))
            }
        }
    }
}
