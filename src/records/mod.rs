//! Typed records persisted by the store
//!
//! Each record type owns one collection and knows how to build itself from
//! an already-validated form body.

mod contact;
mod form;
pub mod ids;
mod quote;
mod shipment;
pub mod timestamp;

pub use contact::Contact;
pub use form::{field_text, truthy_text, truthy_value};
pub use quote::Quote;
pub use shipment::{field_matches, Shipment, StatusUpdate, TimelineEntry};
