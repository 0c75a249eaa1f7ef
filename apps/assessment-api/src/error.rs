//! Error types for the Assessment API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eligibility_engine::EvaluateError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown structure type: {0}")]
    UnknownStructure(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Assessment not ready: {0}")]
    NotReady(#[from] EvaluateError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnknownStructure(s) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown structure type: {}", s),
            ),
            ApiError::PropertyNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Property not found: {}", id))
            }
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotReady(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
