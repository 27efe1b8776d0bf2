//! Public shipment tracking routes
//!
//! Shipments are returned exactly as stored.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;
use super::fallback::api_not_found;
use super::params::{first_param, QueryPairs, TrackingId};
use super::state::AppState;
use crate::records::{field_matches, Shipment};
use crate::store::Record;

#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub success: bool,
    pub shipment: Value,
}

#[derive(Debug, Serialize)]
pub struct ShipmentsListResponse {
    pub success: bool,
    pub count: usize,
    pub shipments: Vec<Value>,
}

/// Tracking routes (mounted under `/api`)
pub fn tracking_routes() -> Router<AppState> {
    Router::new()
        .route("/track/:id", get(track_handler).fallback(api_not_found))
        .route("/shipments", get(list_shipments_handler).fallback(api_not_found))
}

/// GET /api/track/:id
async fn track_handler(
    State(state): State<AppState>,
    TrackingId(tracking_id): TrackingId,
) -> Result<Json<TrackResponse>, ApiError> {
    if tracking_id.is_empty() {
        return Err(ApiError::BadRequest("Tracking ID is required.".to_string()));
    }

    let shipment = state
        .store
        .find_by_key(Shipment::COLLECTION, "id", &Value::String(tracking_id))
        .ok_or_else(|| ApiError::NotFound("Tracking ID not found.".to_string()))?;

    Ok(Json(TrackResponse {
        success: true,
        shipment,
    }))
}

/// GET /api/shipments?status=&serviceType=
async fn list_shipments_handler(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Json<ShipmentsListResponse> {
    let mut shipments = state.store.read_all(Shipment::COLLECTION);

    if let Some(status) = first_param(&query, "status") {
        shipments.retain(|s| field_matches(s, "status", status));
    }
    if let Some(service_type) = first_param(&query, "serviceType") {
        shipments.retain(|s| field_matches(s, "serviceType", service_type));
    }

    Json(ShipmentsListResponse {
        success: true,
        count: shipments.len(),
        shipments,
    })
}
