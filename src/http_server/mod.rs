//! # HTTP Server Module
//!
//! JSON API for the logistics site.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/track/:id` - Shipment by tracking code
//! - `GET /api/shipments` - Shipments, filterable by status and service type
//! - `POST /api/contact`, `GET /api/contacts` - Contact form
//! - `POST /api/quote`, `GET /api/quotes` - Quote requests
//! - `/api/admin/shipments[/:id]` - Shipment create/update/delete (admin key)

pub mod admin_routes;
pub mod auth;
pub mod body;
pub mod config;
pub mod contact_routes;
pub mod errors;
mod fallback;
pub mod params;
pub mod health_routes;
pub mod quote_routes;
pub mod response;
pub mod server;
pub mod state;
pub mod tracking_routes;

pub use config::{AppConfig, ConfigError, Environment};
pub use errors::ApiError;
pub use server::HttpServer;
pub use state::AppState;
