//! authgate-server - serves the management API over HTTP

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use authgate_api::{AppState, router};
use authgate_config::{ConfigHandle, FilePersister, load_config};
use authgate_credential::{MemoryAuthStore, PriorityRegistry, load_auth_dir};
use clap::Parser;

/// Command-line arguments; flags override the configuration file without being saved into it
#[derive(Debug, Parser)]
#[command(name = "authgate-server", version, about = "Auth gateway management server")]
struct Args {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(short, long, env = "AUTHGATE_CONFIG", default_value = "config.yaml")]
    config: PathBuf,

    /// Listen address
    #[arg(long, env = "AUTHGATE_HOST")]
    host: Option<String>,

    /// Listen port
    #[arg(long, env = "AUTHGATE_PORT")]
    port: Option<u16>,

    /// Directory holding credential files
    #[arg(long, env = "AUTHGATE_AUTH_DIR")]
    auth_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(&args.config)
        .await
        .with_context(|| format!("loading {}", args.config.display()))?;
    let log = authgate_log::init_with(config.logging.clone()).context("initializing logging")?;
    tracing::debug!(format = ?log.format(), "Logging initialized");

    let host = args.host.clone().unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);
    let auth_dir = args.auth_dir.clone().unwrap_or_else(|| config.auth_dir.clone());

    let store = Arc::new(MemoryAuthStore::new());
    load_auth_dir(&auth_dir, &store)
        .await
        .with_context(|| format!("loading auth directory {}", auth_dir.display()))?;

    let persister = FilePersister::new(&args.config).context("configuring persistence")?;
    tracing::info!(
        path = %persister.path().display(),
        format = %persister.format(),
        "Configuration changes will be saved"
    );
    let config = ConfigHandle::new(config, Arc::new(persister));
    let registry = PriorityRegistry::builder()
        .store(store)
        .config(config)
        .build();
    registry
        .seed_from_config()
        .await
        .context("applying configured priorities")?;

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("binding {host}:{port}"))?;
    tracing::info!(addr = %listener.local_addr()?, "Management API listening");

    axum::serve(listener, router(AppState::new(registry)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving management API")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
