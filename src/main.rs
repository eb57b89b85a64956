//! Fleamarket Server: classifieds marketplace backend.
//!
//! Main entry point that loads configuration, picks the store backend,
//! wires the services, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinError;

use tracing_subscriber::{EnvFilter, fmt};

use fleamarket_api::{AppState, build_router};
use fleamarket_core::config::{AppConfig, DatabaseBackend};
use fleamarket_core::error::AppError;
use fleamarket_core::result::AppResult;
use fleamarket_database::DatabasePool;
use fleamarket_database::migration::run_migrations;
use fleamarket_database::repositories::{
    ItemRepository, ItemStore, MemoryItemStore, MemoryUserStore, UserRepository, UserStore,
};

#[tokio::main]
async fn main() {
    let env = AppConfig::environment();
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration (env: {env}): {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. `RUST_LOG` overrides the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting Fleamarket v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Stores ───────────────────────────────────────────
    let (users, items, db_pool) = open_stores(&config).await?;

    // ── Step 2: Services and router ──────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let mut state = AppState::new(config, users, items)?;
    if let Some(pool) = &db_pool {
        state = state.with_database(pool.clone());
    }
    let app = build_router(state);

    // ── Step 3: Serve ────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Fleamarket server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.changed().await;
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut server => return finish(joined),
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, draining connections");
        }
    }

    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => finish(joined)?,
        Err(_) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Grace period elapsed, dropping open connections"
            );
            server.abort();
        }
    }

    // ── Step 5: Cleanup ──────────────────────────────────────────
    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("Fleamarket server shut down gracefully");
    Ok(())
}

/// Flatten the server task's outcome.
fn finish(joined: Result<std::io::Result<()>, JoinError>) -> AppResult<()> {
    joined
        .map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))
}

/// Build the account and listing stores for the configured backend.
async fn open_stores(
    config: &AppConfig,
) -> AppResult<(Arc<dyn UserStore>, Arc<dyn ItemStore>, Option<DatabasePool>)> {
    tracing::info!(backend = %config.database.backend, "Opening stores");

    match config.database.backend {
        DatabaseBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            run_migrations(pool.pool()).await?;

            let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.pool().clone()));
            let items: Arc<dyn ItemStore> = Arc::new(ItemRepository::new(pool.pool().clone()));
            Ok((users, items, Some(pool)))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory stores; data is lost on restart");
            let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
            let items: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
            Ok((users, items, None))
        }
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
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
}
