//! Unmatched API paths

use axum::{extract::OriginalUri, http::Method};

use super::errors::ApiError;

/// 404 for any `/api/*` path or method with no handler
pub async fn api_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("API endpoint not found: {} {}", method, uri.path()))
}
