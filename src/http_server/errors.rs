//! API error envelope
//!
//! Every failure is answered as JSON with `success: false` and either an
//! `errors` list (validation) or a `message`.

use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message returned for internal errors in production
pub const GENERIC_INTERNAL_MESSAGE: &str = "An internal server error occurred.";

/// Errors surfaced at the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Server authentication not configured.")]
    AuthNotConfigured,

    #[error("Missing API key. Provide x-api-key header.")]
    MissingApiKey,

    #[error("Invalid API key.")]
    InvalidApiKey,

    /// Unexpected failure. `stack` is only populated outside production.
    #[error("{message}")]
    Internal {
        message: String,
        stack: Option<String>,
    },
}

impl ApiError {
    /// Logs `err` in full and wraps it for the caller, hiding the detail in
    /// production.
    pub fn internal<E: StdError + ?Sized>(err: &E, production: bool) -> Self {
        let chain = error_chain(err);
        error!(error = %err, chain = %chain, "internal error");
        Self::internal_message(err.to_string(), chain, production)
    }

    pub(crate) fn internal_message(message: String, stack: String, production: bool) -> Self {
        if production {
            Self::Internal {
                message: GENERIC_INTERNAL_MESSAGE.to_string(),
                stack: None,
            }
        } else {
            Self::Internal {
                message,
                stack: Some(stack),
            }
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AuthNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MissingApiKey => StatusCode::UNAUTHORIZED,
            ApiError::InvalidApiKey => StatusCode::FORBIDDEN,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body: `{success: false, message}` or `{success: false, errors}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            errors: None,
            stack: None,
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(errors) => Self {
                success: false,
                message: None,
                errors: Some(errors),
                stack: None,
            },
            ApiError::Internal { message, stack } => Self {
                stack,
                ..Self::message(message)
            },
            other => Self::message(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// Display of an error followed by each of its sources, one per line
fn error_chain<E: StdError + ?Sized>(err: &E) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str("\n  caused by: ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Validation(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::AuthNotConfigured.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::MissingApiKey.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidApiKey.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_body() {
        let body = ErrorResponse::from(ApiError::Validation(vec!["Name is required.".into()]));
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0], "Name is required.");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_internal_hidden_in_production() {
        let err = StoreError::Backend("disk on fire".into());

        let hidden = ErrorResponse::from(ApiError::internal(&err, true));
        assert_eq!(hidden.message.as_deref(), Some(GENERIC_INTERNAL_MESSAGE));
        assert!(hidden.stack.is_none());

        let shown = ErrorResponse::from(ApiError::internal(&err, false));
        assert!(shown.message.unwrap().contains("disk on fire"));
        assert!(shown.stack.is_some());
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = StoreError::io(
            "shipments",
            std::io::Error::new(std::io::ErrorKind::Other, "read-only filesystem"),
        );
        let chain = error_chain(&err);
        assert!(chain.contains("caused by: read-only filesystem"));
    }
}
