//! freightline - backend for a logistics company website
//!
//! Accepts contact and quote form submissions, tracks shipments by
//! generated tracking code, and exposes an admin-key-gated surface for
//! managing shipments. Records persist as one pretty-printed JSON array
//! file per collection.

pub mod cli;
pub mod http_server;
pub mod logging;
pub mod records;
pub mod schema;
pub mod store;
