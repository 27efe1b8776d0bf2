//! HTTP Server Configuration
//!
//! Layered with figment: built-in defaults, then an optional JSON file, then
//! `FREIGHTLINE_*` environment variables, then the bare `ADMIN_API_KEY` and
//! `PORT` variables.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PREFIX: &str = "FREIGHTLINE_";

/// Deployment environment. Controls how much internal error detail is
/// returned to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory holding one JSON file per collection
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Static site served for non-API paths
    #[serde(default)]
    pub public_dir: Option<PathBuf>,

    /// Shared secret for `/api/admin/*`
    #[serde(default)]
    pub admin_api_key: Option<String>,

    #[serde(default)]
    pub environment: Environment,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            data_dir: default_data_dir(),
            public_dir: None,
            admin_api_key: None,
            environment: Environment::default(),
        }
    }
}

impl AppConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Provider stack, exposed so callers can add their own layers
    pub fn figment(config_file: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Json::file(path));
        }

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&["admin_api_key", "port"])))
    }

    /// Load configuration from all layers
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Ok(Self::figment(config_file)?.extract()?)
    }

    /// Configured admin key. An empty key counts as unset.
    pub fn admin_key(&self) -> Option<&str> {
        self.admin_api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
