//! Admin shipment management
//!
//! Every route here sits behind [`require_admin_key`], including unknown
//! paths under `/api/admin`. Writes rewrite the shipments collection from
//! its stored records, so records of any shape survive a create or update.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::auth::require_admin_key;
use super::body::FormBody;
use super::errors::ApiError;
use super::fallback::api_not_found;
use super::params::TrackingId;
use super::response::MessageResponse;
use super::state::AppState;
use crate::records::ids::unused_tracking_code;
use crate::records::{timestamp, Shipment, StatusUpdate};
use crate::schema::catalog;
use crate::store::Record;

#[derive(Debug, Serialize)]
pub struct ShipmentResponse {
    pub success: bool,
    pub message: String,
    pub shipment: Value,
}

fn shipment_not_found() -> ApiError {
    ApiError::NotFound("Shipment not found.".to_string())
}

fn has_id(record: &Value, id: &str) -> bool {
    record.get("id").and_then(Value::as_str) == Some(id)
}

/// Admin routes (mounted under `/api/admin`)
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/shipments", post(create_shipment_handler).fallback(api_not_found))
        .route(
            "/shipments/:id",
            put(update_shipment_handler)
                .delete(delete_shipment_handler)
                .fallback(api_not_found),
        )
        .fallback(api_not_found)
        .layer(middleware::from_fn_with_state(state, require_admin_key))
}

/// POST /api/admin/shipments
async fn create_shipment_handler(
    State(state): State<AppState>,
    FormBody(body): FormBody,
) -> Result<(StatusCode, Json<ShipmentResponse>), ApiError> {
    let errors = catalog::shipment().validate_fields(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let mut shipments = state.store.read_all(Shipment::COLLECTION);
    let tracking_id = unused_tracking_code(&mut rand::thread_rng(), |code| {
        shipments.iter().any(|s| has_id(s, code))
    });

    let shipment = Shipment::from_submission(tracking_id.clone(), &body, timestamp::now());
    let record = serde_json::to_value(&shipment).map_err(|e| state.internal_error(&e))?;
    shipments.push(record.clone());
    state
        .store
        .write_all(Shipment::COLLECTION, &shipments)
        .map_err(|e| state.internal_error(&e))?;

    info!(tracking_id = %tracking_id, "created shipment");

    Ok((
        StatusCode::CREATED,
        Json(ShipmentResponse {
            success: true,
            message: format!("Shipment {} created successfully.", tracking_id),
            shipment: record,
        }),
    ))
}

/// PUT /api/admin/shipments/:id
async fn update_shipment_handler(
    State(state): State<AppState>,
    TrackingId(tracking_id): TrackingId,
    FormBody(body): FormBody,
) -> Result<Json<ShipmentResponse>, ApiError> {
    let update = StatusUpdate::from_body(&body)
        .ok_or_else(|| ApiError::BadRequest("Status is required.".to_string()))?;

    let mut shipments = state.store.read_all(Shipment::COLLECTION);
    let record = shipments
        .iter_mut()
        .find(|s| has_id(s, &tracking_id))
        .and_then(Value::as_object_mut)
        .ok_or_else(shipment_not_found)?;

    update.apply_to(record, timestamp::now());
    let updated = Value::Object(record.clone());

    state
        .store
        .write_all(Shipment::COLLECTION, &shipments)
        .map_err(|e| state.internal_error(&e))?;

    let status = update.status_text();
    info!(tracking_id = %tracking_id, status = %status, "updated shipment");

    Ok(Json(ShipmentResponse {
        success: true,
        message: format!("Shipment {} updated to \"{}\".", tracking_id, status),
        shipment: updated,
    }))
}

/// DELETE /api/admin/shipments/:id
async fn delete_shipment_handler(
    State(state): State<AppState>,
    TrackingId(tracking_id): TrackingId,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .store
        .delete_by_key(Shipment::COLLECTION, "id", &Value::String(tracking_id.clone()))
        .map_err(|e| state.internal_error(&e))?;
    if !deleted {
        return Err(shipment_not_found());
    }

    info!(tracking_id = %tracking_id, "deleted shipment");

    Ok(Json(MessageResponse::ok(format!("Shipment {} deleted.", tracking_id))))
}
