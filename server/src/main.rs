//! Roster user service
//!
//! Serves an in-memory user registry over HTTP. All state lives in
//! process memory and is discarded on exit.
//!
//! Usage:
//!   roster-server --port 8080 --base-path /api/v1

use std::sync::Arc;
use anyhow::{Context, Result};
use clap::Parser;
use roster_registry::UserRegistry;
use roster_server::{build_router, shutdown_signal, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "In-memory user registry over HTTP")]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Path prefix for every route
    #[arg(long, default_value = "/api/v1")]
    base_path: String,

    /// Enable verbose debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            base_path: args.base_path,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ServerConfig::from(args);
    let registry = Arc::new(UserRegistry::new());
    let app = build_router(registry, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(
        "Roster listening on {} (routes under '{}/users')",
        listener.local_addr().context("Failed to read local address")?,
        config.base_path()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Roster shut down");
    Ok(())
}
