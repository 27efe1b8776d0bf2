//! Path and query extraction that always answers in the JSON envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::errors::ApiError;
use crate::records::ids::normalize_tracking_id;

/// Query string as ordered key/value pairs.
///
/// Decoding is lossy and never rejects, so repeated or unexpected keys do
/// not turn a listing into an error.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`, ignoring empty values
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

/// Tracking id from the `:id` path segment, trimmed and upper-cased
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for TrackingId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(normalize_tracking_id(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_param_takes_first_occurrence() {
        let query = pairs(&[("status", "Delivered"), ("status", "Pending")]);
        assert_eq!(first_param(&query, "status"), Some("Delivered"));
        assert_eq!(first_param(&query, "serviceType"), None);
    }

    #[test]
    fn test_first_param_ignores_empty() {
        let query = pairs(&[("status", "")]);
        assert_eq!(first_param(&query, "status"), None);
    }
}
