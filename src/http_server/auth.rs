//! Admin key check
//!
//! Admin routes require the shared secret in the `x-api-key` header. The
//! outcome is three-way: the server has no key configured (500), the
//! caller sent none (401), or the caller's key does not match (403).

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::error;

use super::errors::ApiError;
use super::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Checks `headers` against the configured admin key
pub fn check_admin_key(configured: Option<&str>, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = configured.filter(|k| !k.is_empty()) else {
        error!("admin API key is not configured");
        return Err(ApiError::AuthNotConfigured);
    };

    let provided = match headers.get(API_KEY_HEADER) {
        Some(value) if !value.is_empty() => value.as_bytes(),
        _ => return Err(ApiError::MissingApiKey),
    };

    if bool::from(provided.ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(ApiError::InvalidApiKey)
    }
}

/// Middleware guarding every admin route
pub async fn require_admin_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    check_admin_key(state.config.admin_key(), request.headers())?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(key: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(key) = key {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        }
        headers
    }

    #[test]
    fn test_unconfigured() {
        assert!(matches!(
            check_admin_key(None, &headers(Some("k"))),
            Err(ApiError::AuthNotConfigured)
        ));
        assert!(matches!(
            check_admin_key(Some(""), &headers(Some("k"))),
            Err(ApiError::AuthNotConfigured)
        ));
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            check_admin_key(Some("secret"), &headers(None)),
            Err(ApiError::MissingApiKey)
        ));
        assert!(matches!(
            check_admin_key(Some("secret"), &headers(Some(""))),
            Err(ApiError::MissingApiKey)
        ));
    }

    #[test]
    fn test_mismatch() {
        assert!(matches!(
            check_admin_key(Some("secret"), &headers(Some("secreT"))),
            Err(ApiError::InvalidApiKey)
        ));
        assert!(matches!(
            check_admin_key(Some("secret"), &headers(Some("secret-longer"))),
            Err(ApiError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_match() {
        assert!(check_admin_key(Some("secret"), &headers(Some("secret"))).is_ok());
    }
}
