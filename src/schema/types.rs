//! Schema building blocks

use regex::Regex;
use serde_json::Value;
use std::fmt;

/// Runtime kind of a JSON value, as reported in type-mismatch messages.
///
/// Arrays count as objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
}

impl ValueKind {
    /// Returns the kind name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
        }
    }

    /// Kind of a present, non-null value
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(ValueKind::Boolean),
            Value::Number(_) => Some(ValueKind::Number),
            Value::String(_) => Some(ValueKind::String),
            Value::Array(_) | Value::Object(_) => Some(ValueKind::Object),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present and not blank
    Required,
    /// Value must be of the given kind
    Type(ValueKind),
    /// String form of the value must match
    Pattern(Regex),
    /// Minimum length of the string form
    MinLength(usize),
    /// Maximum length of the string form
    MaxLength(usize),
    /// Minimum numeric value
    Min(f64),
}

impl Rule {
    /// Evaluation rank. Rules run in ascending rank regardless of the order
    /// they were declared in.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Rule::Required => 0,
            Rule::Type(_) => 1,
            Rule::Pattern(_) => 2,
            Rule::MinLength(_) => 3,
            Rule::MaxLength(_) => 4,
            Rule::Min(_) => 5,
        }
    }
}

/// Rules for one named field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    label: Option<String>,
    rules: Vec<Rule>,
}

impl FieldSpec {
    /// A field that must be supplied
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            rules: vec![Rule::Required],
        }
    }

    /// A field that may be omitted
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            rules: Vec::new(),
        }
    }

    /// Display name used in messages
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(self, kind: ValueKind) -> Self {
        self.rule(Rule::Type(kind))
    }

    pub fn pattern(self, pattern: Regex) -> Self {
        self.rule(Rule::Pattern(pattern))
    }

    pub fn min_length(self, len: usize) -> Self {
        self.rule(Rule::MinLength(len))
    }

    pub fn max_length(self, len: usize) -> Self {
        self.rule(Rule::MaxLength(len))
    }

    /// Adds an arbitrary rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label if one was set, else the field name
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required))
    }

    /// Rules in evaluation order
    pub fn ordered_rules(&self) -> Vec<&Rule> {
        let mut rules: Vec<&Rule> = self.rules.iter().collect();
        rules.sort_by_key(|r| r.rank());
        rules
    }
}

/// Ordered collection of field specs.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field. Errors are reported in the order fields are added.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validates a record against this schema
    pub fn validate(&self, record: &Value) -> Vec<String> {
        super::validate(self, record)
    }

    /// Validates an object's fields against this schema
    pub fn validate_fields(&self, fields: &serde_json::Map<String, Value>) -> Vec<String> {
        super::validator::validate_fields(self, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_defaults_to_name() {
        let spec = FieldSpec::required("email");
        assert_eq!(spec.display_label(), "email");

        let spec = spec.label("Email");
        assert_eq!(spec.display_label(), "Email");
    }

    #[test]
    fn test_rules_sorted_by_rank() {
        let spec = FieldSpec::optional("notes")
            .rule(Rule::Min(1.0))
            .max_length(10)
            .kind(ValueKind::String)
            .rule(Rule::Required);

        let ranks: Vec<u8> = spec.ordered_rules().iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 4, 5]);
        assert!(spec.is_required());
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(ValueKind::of(&json!("a")), Some(ValueKind::String));
        assert_eq!(ValueKind::of(&json!(1.5)), Some(ValueKind::Number));
        assert_eq!(ValueKind::of(&json!(false)), Some(ValueKind::Boolean));
        assert_eq!(ValueKind::of(&json!([1])), Some(ValueKind::Object));
        assert_eq!(ValueKind::of(&json!({})), Some(ValueKind::Object));
        assert_eq!(ValueKind::of(&Value::Null), None);
    }
}
