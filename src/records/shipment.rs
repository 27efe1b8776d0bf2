//! Shipments and their status timeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::form::{field_text, truthy_text, truthy_value};
use super::timestamp;
use crate::schema::value::display_string;
use crate::store::Record;

pub const DEFAULT_SERVICE_TYPE: &str = "Standard";
pub const DEFAULT_CARGO_TYPE: &str = "General Cargo";

/// One status change. Timelines are append-only, earliest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: String,
    pub location: String,
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Tracking code
    pub id: String,
    pub status: String,
    pub origin: String,
    pub destination: String,
    /// Free text, not parsed as a date
    pub estimated_delivery: String,
    pub service_type: String,
    pub cargo_type: String,
    #[serde(default)]
    pub weight: Option<Value>,
    pub current_location: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Record for Shipment {
    const COLLECTION: &'static str = "shipments";
}

/// A status change requested by an admin.
///
/// Values are kept as submitted and written to the stored record without
/// coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub status: Value,
    pub location: Option<Value>,
    pub description: Option<Value>,
    pub estimated_delivery: Option<Value>,
}

impl StatusUpdate {
    /// `None` if the body carries no usable status
    pub fn from_body(body: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            status: truthy_value(body, "status")?,
            location: truthy_value(body, "location"),
            description: truthy_value(body, "description"),
            estimated_delivery: truthy_value(body, "estimatedDelivery"),
        })
    }

    /// Status in display form, for messages
    pub fn status_text(&self) -> String {
        display_string(&self.status)
    }

    /// Applies the change to a stored shipment record and appends a
    /// timeline entry.
    ///
    /// Works on the record as stored: fields this crate does not model are
    /// kept, and a missing or non-array timeline starts a new one.
    /// Location and estimated delivery change only when supplied.
    pub fn apply_to(&self, record: &mut Map<String, Value>, now: DateTime<Utc>) {
        let now = Value::String(timestamp::format(&now));

        record.insert("status".to_string(), self.status.clone());
        record.insert("updatedAt".to_string(), now.clone());
        if let Some(location) = &self.location {
            record.insert("currentLocation".to_string(), location.clone());
        }
        if let Some(eta) = &self.estimated_delivery {
            record.insert("estimatedDelivery".to_string(), eta.clone());
        }

        let mut entry = Map::new();
        entry.insert("status".to_string(), self.status.clone());
        if let Some(location) = self
            .location
            .clone()
            .or_else(|| record.get("currentLocation").cloned())
        {
            entry.insert("location".to_string(), location);
        }
        entry.insert("timestamp".to_string(), now);
        entry.insert(
            "description".to_string(),
            self.description.clone().unwrap_or_else(|| {
                Value::String(format!("Status updated to \"{}\"", self.status_text()))
            }),
        );

        match record.get_mut("timeline") {
            Some(Value::Array(entries)) => entries.push(Value::Object(entry)),
            _ => {
                record.insert("timeline".to_string(), Value::Array(vec![Value::Object(entry)]));
            }
        }
    }
}

/// Case-insensitive match of a stored record's field against a filter.
///
/// Records missing the field never match.
pub fn field_matches(record: &Value, key: &str, wanted: &str) -> bool {
    match record.get(key) {
        None | Some(Value::Null) => false,
        Some(value) => display_string(value).to_lowercase() == wanted.to_lowercase(),
    }
}

impl Shipment {
    /// Builds a shipment from a body that passed the shipment schema.
    ///
    /// The timeline is seeded with the creation event at the origin.
    pub fn from_submission(id: String, body: &Map<String, Value>, now: DateTime<Utc>) -> Self {
        let status = field_text(body, "status");
        let origin = field_text(body, "origin").trim().to_string();

        Self {
            id,
            status: status.clone(),
            origin: origin.clone(),
            destination: field_text(body, "destination").trim().to_string(),
            estimated_delivery: field_text(body, "estimatedDelivery"),
            service_type: truthy_text(body, "serviceType")
                .unwrap_or_else(|| DEFAULT_SERVICE_TYPE.to_string()),
            cargo_type: truthy_text(body, "cargoType")
                .unwrap_or_else(|| DEFAULT_CARGO_TYPE.to_string()),
            weight: truthy_value(body, "weight"),
            current_location: origin.clone(),
            customer_name: truthy_text(body, "customerName").unwrap_or_default(),
            customer_email: truthy_text(body, "customerEmail").unwrap_or_default(),
            created_at: now,
            updated_at: now,
            timeline: vec![TimelineEntry {
                description: format!("Shipment created — {}", status),
                status,
                location: origin,
                timestamp: now,
            }],
        }
    }
}
