//! # HTTP Server
//!
//! Combines the API routers, the optional static site and the shared
//! middleware stack into one axum application.

use std::any::Any;
use std::net::SocketAddr;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use super::admin_routes::admin_routes;
use super::config::AppConfig;
use super::contact_routes::contact_routes;
use super::errors::ApiError;
use super::fallback::api_not_found;
use super::health_routes::health_routes;
use super::quote_routes::quote_routes;
use super::state::AppState;
use super::tracking_routes::tracking_routes;
use crate::store::RecordStore;

/// HTTP server for the logistics site
pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    /// Server persisting to files under `config.data_dir`
    pub fn new(config: AppConfig) -> Self {
        let store = RecordStore::local(config.data_dir.clone());
        Self::with_store(config, store)
    }

    /// Server over an arbitrary store backend
    pub fn with_store(config: AppConfig, store: RecordStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &AppConfig, store: RecordStore) -> Router {
        let state = AppState::new(config.clone(), store);

        let api = tracking_routes()
            .merge(contact_routes())
            .merge(quote_routes())
            .nest("/admin", admin_routes(state.clone()))
            .fallback(api_not_found);

        let mut router: Router = health_routes::<AppState>()
            .nest("/api", api)
            .with_state(state);

        if let Some(public_dir) = &config.public_dir {
            router = router.fallback_service(ServeDir::new(public_dir));
        }

        let production = config.is_production();
        router
            .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
                panic_response(panic, production)
            }))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        if self.config.admin_key().is_none() {
            warn!("ADMIN_API_KEY is not set; admin routes will answer 500");
        }

        let listener = TcpListener::bind(addr).await?;
        info!(
            %addr,
            data_dir = %self.config.data_dir.display(),
            environment = ?self.config.environment,
            "server listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>, production: bool) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    error!(panic = %message, "request handler panicked");
    ApiError::internal_message(message.clone(), format!("panic: {}", message), production)
        .into_response()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
