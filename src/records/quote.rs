//! Quote requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::form::{field_text, truthy_text, truthy_value};
use super::ids::quote_ref;
use crate::store::Record;

pub const DEFAULT_QUOTE_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub quote_ref: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub origin: String,
    pub destination: String,
    pub cargo_type: String,
    #[serde(default)]
    pub weight: Option<Value>,
    pub service_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(with = "super::timestamp")]
    pub submitted_at: DateTime<Utc>,
}

fn default_status() -> String {
    DEFAULT_QUOTE_STATUS.to_string()
}

impl Record for Quote {
    const COLLECTION: &'static str = "quotes";
}

impl Quote {
    /// Builds a quote from a body that passed the quote schema
    pub fn from_submission(body: &Map<String, Value>, now: DateTime<Utc>) -> Self {
        let trimmed = |key: &str| field_text(body, key).trim().to_string();

        Self {
            id: Uuid::new_v4(),
            quote_ref: quote_ref(now),
            name: trimmed("name"),
            email: trimmed("email").to_lowercase(),
            phone: truthy_text(body, "phone")
                .map(|p| p.trim().to_string())
                .unwrap_or_default(),
            origin: trimmed("origin"),
            destination: trimmed("destination"),
            cargo_type: trimmed("cargoType"),
            weight: truthy_value(body, "weight"),
            service_type: trimmed("serviceType"),
            notes: truthy_text(body, "notes")
                .map(|n| n.trim().to_string())
                .unwrap_or_default(),
            status: default_status(),
            submitted_at: now,
        }
    }

    /// Case-insensitive status match
    pub fn has_status(&self, status: &str) -> bool {
        self.status.to_lowercase() == status.to_lowercase()
    }
}
