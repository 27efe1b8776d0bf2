//! Contact form submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::form::{field_text, truthy_text};
use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    pub message: String,
    #[serde(with = "super::timestamp")]
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Record for Contact {
    const COLLECTION: &'static str = "contacts";
}

impl Contact {
    /// Builds a contact from a body that passed the contact schema
    pub fn from_submission(body: &Map<String, Value>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: field_text(body, "firstName").trim().to_string(),
            last_name: field_text(body, "lastName").trim().to_string(),
            email: field_text(body, "email").trim().to_lowercase(),
            phone: truthy_text(body, "phone")
                .map(|p| p.trim().to_string())
                .unwrap_or_default(),
            service: truthy_text(body, "service").unwrap_or_default(),
            message: field_text(body, "message").trim().to_string(),
            submitted_at: now,
            read: false,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
