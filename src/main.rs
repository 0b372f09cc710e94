//! ClubHub server: club discovery and event bulletin API.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use clubhub_api::AppState;
use clubhub_core::config::{AppConfig, DatabaseProvider};
use clubhub_core::error::AppError;
use clubhub_database::{DatabasePool, MemoryStore, Stores};

#[tokio::main]
async fn main() {
    let env = std::env::var("CLUBHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(%env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Open the store, build the state and serve until a shutdown signal.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ClubHub v{}", env!("CARGO_PKG_VERSION"));

    let (stores, pool) = match config.database.provider {
        DatabaseProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                clubhub_database::migration::run_migrations(pool.pool()).await?;
            }
            (Stores::postgres(pool.clone()), Some(pool))
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            (Stores::memory(Arc::new(MemoryStore::new())), None)
        }
    };

    let state = AppState::new(config, stores);
    clubhub_api::app::serve(state, shutdown_signal()).await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("ClubHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
