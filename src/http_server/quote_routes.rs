//! Quote request routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use super::body::FormBody;
use super::errors::ApiError;
use super::fallback::api_not_found;
use super::params::{first_param, QueryPairs};
use super::state::AppState;
use crate::records::{timestamp, Quote};
use crate::schema::catalog;

pub const QUOTE_RECEIVED_MESSAGE: &str =
    "Quote request received! Our team will contact you shortly with a detailed quote.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCreatedResponse {
    pub success: bool,
    pub message: String,
    pub quote_ref: String,
}

#[derive(Debug, Serialize)]
pub struct QuotesListResponse {
    pub success: bool,
    pub count: usize,
    pub quotes: Vec<Quote>,
}

/// Quote routes (mounted under `/api`)
pub fn quote_routes() -> Router<AppState> {
    Router::new()
        .route("/quote", post(submit_quote_handler).fallback(api_not_found))
        .route("/quotes", get(list_quotes_handler).fallback(api_not_found))
}

/// POST /api/quote
async fn submit_quote_handler(
    State(state): State<AppState>,
    FormBody(body): FormBody,
) -> Result<(StatusCode, Json<QuoteCreatedResponse>), ApiError> {
    let errors = catalog::quote().validate_fields(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let quote = Quote::from_submission(&body, timestamp::now());
    state
        .store
        .append_typed(&quote)
        .map_err(|e| state.internal_error(&e))?;

    info!(
        quote_ref = %quote.quote_ref,
        name = %quote.name,
        email = %quote.email,
        "new quote request"
    );

    Ok((
        StatusCode::CREATED,
        Json(QuoteCreatedResponse {
            success: true,
            message: QUOTE_RECEIVED_MESSAGE.to_string(),
            quote_ref: quote.quote_ref,
        }),
    ))
}

/// GET /api/quotes?status=, newest first
async fn list_quotes_handler(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Json<QuotesListResponse> {
    let mut quotes: Vec<Quote> = state.store.read_typed();

    if let Some(status) = first_param(&query, "status") {
        quotes.retain(|q| q.has_status(status));
    }
    quotes.reverse();

    Json(QuotesListResponse {
        success: true,
        count: quotes.len(),
        quotes,
    })
}
