//! Contact form routes

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::body::FormBody;
use super::errors::ApiError;
use super::fallback::api_not_found;
use super::state::AppState;
use crate::records::{timestamp, Contact};
use crate::schema::catalog;

pub const CONTACT_RECEIVED_MESSAGE: &str =
    "Message received successfully! We'll get back to you within 24 hours.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreatedResponse {
    pub success: bool,
    pub message: String,
    pub contact_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ContactsListResponse {
    pub success: bool,
    pub count: usize,
    pub contacts: Vec<Contact>,
}

/// Contact routes (mounted under `/api`)
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact_handler).fallback(api_not_found))
        .route("/contacts", get(list_contacts_handler).fallback(api_not_found))
}

/// POST /api/contact
async fn submit_contact_handler(
    State(state): State<AppState>,
    FormBody(body): FormBody,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), ApiError> {
    let errors = catalog::contact().validate_fields(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let contact = Contact::from_submission(&body, timestamp::now());
    state
        .store
        .append_typed(&contact)
        .map_err(|e| state.internal_error(&e))?;

    info!(
        contact_id = %contact.id,
        name = %contact.full_name(),
        email = %contact.email,
        "new contact message"
    );

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            success: true,
            message: CONTACT_RECEIVED_MESSAGE.to_string(),
            contact_id: contact.id,
        }),
    ))
}

/// GET /api/contacts, newest first
async fn list_contacts_handler(State(state): State<AppState>) -> Json<ContactsListResponse> {
    let mut contacts: Vec<Contact> = state.store.read_typed();
    contacts.reverse();

    Json(ContactsListResponse {
        success: true,
        count: contacts.len(),
        contacts,
    })
}
