//! HTTP error responses.
//!
//! Every failure leaves the server as `{ "code": "...", "errors": [...] }`
//! with a status derived from the error kind.

use crate::error::ShopError;
use crate::model::DomainError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub errors: Vec<String>,
}

/// Error returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Shop(#[from] ShopError),

    /// The request could not be decoded (bad JSON body or path segment).
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Shop(ShopError::Domain(e)) => match e {
                DomainError::Validation(_) | DomainError::DuplicateItem(_) => {
                    StatusCode::BAD_REQUEST
                }
                DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                DomainError::InvalidState(_) => StatusCode::CONFLICT,
            },
            ApiError::Shop(ShopError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Shop(e) => e.code(),
            ApiError::BadRequest(_) => "bad_request",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            errors: vec![self.to_string()],
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::Shop(e.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}
