//! Field-by-field validation.

use serde_json::{Map, Value};
use tracing::debug;

use super::types::{FieldSpec, Rule, Schema, ValueKind};
use super::value::{display_string, format_number, is_blank, to_number, utf16_len};

/// Validates `record` against `schema`.
///
/// Returns every message, in schema field order. An empty list means the
/// record is valid. A record that is not a JSON object is treated as one
/// with no fields.
pub fn validate(schema: &Schema, record: &Value) -> Vec<String> {
    match record.as_object() {
        Some(fields) => validate_fields(schema, fields),
        None => validate_fields(schema, &Map::new()),
    }
}

/// Validates an object's fields against `schema`
pub fn validate_fields(schema: &Schema, fields: &Map<String, Value>) -> Vec<String> {
    let mut errors = Vec::new();
    for spec in schema.fields() {
        check_field(spec, fields.get(spec.name()), &mut errors);
    }
    if !errors.is_empty() {
        debug!(schema = schema.name(), errors = errors.len(), "record failed validation");
    }
    errors
}

fn check_field(spec: &FieldSpec, value: Option<&Value>, errors: &mut Vec<String>) {
    let label = spec.display_label();

    if is_blank(value) {
        if spec.is_required() {
            errors.push(format!("{} is required.", label));
        }
        return;
    }

    // Not blank, so present and non-null
    let Some(value) = value else { return };
    let text = display_string(value);

    for rule in spec.ordered_rules() {
        match rule {
            Rule::Required => {}
            Rule::Type(kind) => {
                if ValueKind::of(value) != Some(*kind) {
                    errors.push(format!("{} must be a {}.", label, kind));
                }
            }
            Rule::Pattern(pattern) => {
                if !pattern.is_match(&text) {
                    errors.push(format!("{} is invalid.", label));
                }
            }
            Rule::MinLength(min) => {
                if utf16_len(&text) < *min {
                    errors.push(format!("{} must be at least {} characters.", label, min));
                }
            }
            Rule::MaxLength(max) => {
                if utf16_len(&text) > *max {
                    errors.push(format!("{} must be at most {} characters.", label, max));
                }
            }
            Rule::Min(min) => {
                // Values that do not coerce to a number never fail this rule
                if to_number(value).is_some_and(|n| n < *min) {
                    errors.push(format!("{} must be at least {}.", label, format_number(*min)));
                }
            }
        }
    }
}
