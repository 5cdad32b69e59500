// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::embeddings::VectorModelError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body. `detail` carries the human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error("Word '{0}' not found in vocabulary")]
    WordNotFound(String),

    #[error("Invalid value for '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Too Many Requests")]
    RateLimitExceeded { retry_after: u64 },

    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ApiError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ModelNotLoaded => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::WordNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationError { .. } | ApiError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::ModelNotLoaded => "model_not_loaded",
            ApiError::WordNotFound(_) => "word_not_found",
            ApiError::ValidationError { .. } => "validation_error",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::RateLimitExceeded { .. } => "rate_limit_exceeded",
            ApiError::InternalError(_) => "internal_error",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let field = match self {
            ApiError::ValidationError { field, .. } => Some(field.clone()),
            _ => None,
        };

        ErrorResponse {
            detail: self.to_string(),
            error_type: self.error_type().to_string(),
            field,
        }
    }
}

impl From<VectorModelError> for ApiError {
    fn from(err: VectorModelError) -> Self {
        // Vocabulary misses from inside the model stay 404s.
        match err {
            VectorModelError::WordNotFound(word) => ApiError::WordNotFound(word),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::RateLimitExceeded { retry_after } = self {
            return (
                status,
                [(header::RETRY_AFTER, retry_after.to_string())],
                "Too Many Requests",
            )
                .into_response();
        }

        (status, Json(self.to_response())).into_response()
    }
}
