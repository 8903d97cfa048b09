//! # homelistd — homelist daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run (or revert) migrations
//! - Construct the repository implementation and the home service
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use homelist_adapter_http_axum::state::AppState;
use homelist_adapter_storage_sqlite_sqlx::{Config as DatabaseConfig, SqliteHomeRepository};
use homelist_app::services::home_service::HomeService;

use crate::config::Config;

/// homelist — REST service for home listings
#[derive(Parser)]
#[command(name = "homelistd", version, about)]
struct Cli {
    /// Path to the TOML configuration file (defaults to `homelist.toml`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create the schema if needed and serve the API (default)
    Serve,
    /// Create the `homes` table and exit
    Prepare,
    /// Drop the `homes` table and exit
    Revert,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let database = DatabaseConfig {
        database_url: config.database_url().to_string(),
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, database).await,
        Command::Prepare => {
            database.build().await?;
            tracing::info!(url = config.database_url(), "schema prepared");
            Ok(())
        }
        Command::Revert => {
            database.connect().await?.revert().await?;
            tracing::info!(url = config.database_url(), "schema reverted");
            Ok(())
        }
    }
}

async fn serve(config: &Config, database: DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = database.build().await?;

    let home_repo = SqliteHomeRepository::new(db.pool().clone());
    let state = AppState::new(HomeService::new(home_repo));
    let app = homelist_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "homelistd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homelistd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
