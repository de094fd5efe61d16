//! HTTP error mapping.
//!
//! Engine and validation errors become `{"error": "<message>"}` bodies;
//! the message text comes verbatim from the error's `Display` impl, so
//! the core crate's wording is the wire contract.
//!
//! ## Status Mapping
//! ```text
//! ValidationError                          400
//! EngineError::NotFound                    404
//! EngineError::NotApplicable               400
//! EngineError::UnsupportedType             400
//! EngineError::InvalidDetails              400
//! EngineError::ConditionsNotMet            400
//! EngineError::Store (persistence)         500
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use promo_core::{EngineError, ValidationError};

/// Everything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(EngineError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Engine(EngineError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Engine(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
