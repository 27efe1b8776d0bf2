//! Declarative request validation
//!
//! A [`Schema`] is data: an ordered list of [`FieldSpec`]s, each carrying a
//! set of [`Rule`]s. [`validate`] walks every field and collects
//! human-readable messages so the HTTP layer can report all problems in a
//! single response.
//!
//! # Semantics
//!
//! - A required field that is absent, null or blank yields exactly one
//!   "is required." message and nothing else for that field
//! - A blank optional field is skipped entirely
//! - Type, pattern, length and minimum rules each report independently
//! - Validation never mutates the record and never fails

pub mod catalog;
mod types;
mod validator;
pub mod value;

pub use types::{FieldSpec, Rule, Schema, ValueKind};
pub use validator::{validate, validate_fields};
