//! API error responses
//!
//! Every failure leaves the server as JSON `{ "error": <kind>, "message": <text> }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use risk_core::types::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable kind, e.g. `invalid_strike_price`
    pub error: String,
    /// Human-readable description
    pub message: String,
}

/// Errors returned by the API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Inputs were well-formed but failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be decoded
    #[error("{message}")]
    InvalidBody {
        /// Status chosen by the extractor
        status: StatusCode,
        /// Extractor message
        message: String,
    },
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidBody { status, .. } => *status,
        }
    }

    /// Machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(err) => err.kind(),
            ApiError::InvalidBody { .. } => "invalid_body",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };

        tracing::warn!(status = %status, kind = %body.error, "Request rejected: {}", body.message);

        (status, Json(body)).into_response()
    }
}
