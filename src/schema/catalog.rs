//! Schemas for the public forms and the admin shipment form.

use std::sync::OnceLock;

use regex::Regex;

use super::types::{FieldSpec, Schema, ValueKind};

/// Loose email shape: something@something.something, no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
        .clone()
}

fn required_string(name: &str, label: &str) -> FieldSpec {
    FieldSpec::required(name).kind(ValueKind::String).label(label)
}

fn optional_string(name: &str, label: &str) -> FieldSpec {
    FieldSpec::optional(name).kind(ValueKind::String).label(label)
}

/// Contact form
pub fn contact() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new("contact")
            .field(required_string("firstName", "First name").min_length(1).max_length(100))
            .field(required_string("lastName", "Last name").min_length(1).max_length(100))
            .field(required_string("email", "Email").pattern(email_regex()))
            .field(optional_string("phone", "Phone"))
            .field(optional_string("service", "Service"))
            .field(required_string("message", "Message").min_length(5).max_length(5000))
    })
}

/// Quote request form
pub fn quote() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new("quote")
            .field(required_string("name", "Name").min_length(2).max_length(200))
            .field(required_string("email", "Email").pattern(email_regex()))
            .field(optional_string("phone", "Phone"))
            .field(required_string("origin", "Origin"))
            .field(required_string("destination", "Destination"))
            .field(required_string("cargoType", "Cargo type"))
            .field(FieldSpec::optional("weight").label("Weight (kg)"))
            .field(required_string("serviceType", "Service type"))
            .field(optional_string("notes", "Notes").max_length(5000))
    })
}

/// Admin shipment creation
pub fn shipment() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new("shipment")
            .field(required_string("origin", "Origin"))
            .field(required_string("destination", "Destination"))
            .field(required_string("status", "Status"))
            .field(required_string("estimatedDelivery", "Estimated delivery"))
            .field(optional_string("serviceType", "Service type"))
            .field(optional_string("cargoType", "Cargo type"))
            .field(FieldSpec::optional("weight").label("Weight (kg)"))
            .field(optional_string("customerName", "Customer name"))
            .field(optional_string("customerEmail", "Customer email"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_valid() {
        let record = json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "message": "Need a pallet moved"
        });
        assert!(contact().validate(&record).is_empty());
    }

    #[test]
    fn test_contact_short_message_and_bad_email() {
        let record = json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example",
            "message": "Hi"
        });
        assert_eq!(
            contact().validate(&record),
            vec!["Email is invalid.", "Message must be at least 5 characters."]
        );
    }

    #[test]
    fn test_quote_scenario_is_valid() {
        let record = json!({
            "name": "Jo",
            "email": "a@b.com",
            "origin": "X",
            "destination": "Y",
            "cargoType": "Electronics",
            "serviceType": "Air"
        });
        assert!(quote().validate(&record).is_empty());
    }

    #[test]
    fn test_quote_weight_is_untyped() {
        let record = json!({
            "name": "Jo",
            "email": "a@b.com",
            "origin": "X",
            "destination": "Y",
            "cargoType": "Electronics",
            "serviceType": "Air",
            "weight": "about 40"
        });
        assert!(quote().validate(&record).is_empty());
    }

    #[test]
    fn test_shipment_required_fields() {
        let errors = shipment().validate(&json!({"origin": "Lagos"}));
        assert_eq!(
            errors,
            vec![
                "Destination is required.",
                "Status is required.",
                "Estimated delivery is required."
            ]
        );
    }

    #[test]
    fn test_shipment_optional_type_mismatch() {
        let record = json!({
            "origin": "Lagos",
            "destination": "Accra",
            "status": "Processing",
            "estimatedDelivery": "2026-11-02",
            "customerName": 42
        });
        assert_eq!(shipment().validate(&record), vec!["Customer name must be a string."]);
    }
}
