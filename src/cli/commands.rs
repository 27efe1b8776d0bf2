//! CLI command implementations

use std::path::{Path, PathBuf};

use tracing::info;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::http_server::{AppConfig, HttpServer};
use crate::logging::{init_logging, Verbosity};
use crate::records::{Contact, Quote, Shipment};
use crate::store::{LocalBackend, Record, StoreBackend};

/// Every collection the server reads or writes
pub const COLLECTIONS: [&str; 3] = [Contact::COLLECTION, Quote::COLLECTION, Shipment::COLLECTION];

/// Parse arguments, set up logging and run the command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));
    run_command(cli.command)
}

pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config, data_dir } => {
            let config = resolve_config(config.as_deref(), data_dir, None)?;
            init(&config.data_dir).map(|_| ())
        }
        Command::Start {
            config,
            data_dir,
            port,
        } => {
            let config = resolve_config(config.as_deref(), data_dir, port)?;
            start(config)
        }
    }
}

/// Loads configuration and applies command-line overrides
pub fn resolve_config(
    config_file: Option<&Path>,
    data_dir: Option<PathBuf>,
    port: Option<u16>,
) -> CliResult<AppConfig> {
    let mut config = AppConfig::load(config_file)?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

/// Creates `data_dir` with an empty array file for every missing
/// collection. Existing files are left alone.
///
/// Returns the collections that were created.
pub fn init(data_dir: &Path) -> CliResult<Vec<&'static str>> {
    std::fs::create_dir_all(data_dir)?;
    let backend = LocalBackend::new(data_dir);

    let mut created = Vec::new();
    for collection in COLLECTIONS {
        if backend.load(collection)?.is_none() {
            backend.save(collection, b"[]")?;
            created.push(collection);
        }
    }

    info!(data_dir = %data_dir.display(), created = ?created, "data directory ready");
    Ok(created)
}

/// Runs the HTTP server on a fresh tokio runtime
pub fn start(config: AppConfig) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let server = HttpServer::new(config);
    runtime.block_on(server.start())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_missing_collections() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("data");

        let created = init(&data_dir).unwrap();
        assert_eq!(created, vec!["contacts", "quotes", "shipments"]);
        for name in COLLECTIONS {
            let text = std::fs::read_to_string(data_dir.join(format!("{}.json", name))).unwrap();
            assert_eq!(text, "[]");
        }
    }

    #[test]
    fn test_init_leaves_existing_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("shipments.json"), r#"[{"id": "7CEPLAAAAA"}]"#).unwrap();

        let created = init(temp.path()).unwrap();
        assert_eq!(created, vec!["contacts", "quotes"]);

        let text = std::fs::read_to_string(temp.path().join("shipments.json")).unwrap();
        assert!(text.contains("7CEPLAAAAA"));
    }

    #[test]
    fn test_resolve_config_overrides() {
        let config = resolve_config(None, Some(PathBuf::from("/srv/data")), Some(9000)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.port, 9000);
    }
}
