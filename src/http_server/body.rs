//! Form body extraction
//!
//! Bodies are read loosely: a request without a JSON content type or with
//! an empty body carries no fields, so validation reports what is missing
//! instead of the request being rejected outright.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::{Map, Value};

use super::errors::ApiError;

/// Top-level fields of a JSON request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody(pub Map<String, Value>);

impl FormBody {
    /// Parses a raw body. Arrays and non-JSON bodies carry no fields.
    pub fn parse(is_json: bool, bytes: &[u8]) -> Result<Self, ApiError> {
        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            Ok(Value::Array(_)) => Ok(Self::default()),
            Ok(_) => Err(ApiError::BadRequest(
                "Request body must be a JSON object.".to_string(),
            )),
            Err(e) => Err(ApiError::BadRequest(format!("Malformed JSON body: {}", e))),
        }
    }
}

/// `application/json` or any `+json` media type
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[async_trait]
impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_content_type)
            .unwrap_or(false);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        Self::parse(is_json, &bytes)
    }
}
