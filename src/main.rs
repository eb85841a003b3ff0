//! Showroom Server: access-controlled template showroom
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use showroom_api::AppState;
use showroom_core::config::logging::LogFormat;
use showroom_core::config::{AppConfig, DEFAULT_CONFIG_PATH, StorageBackend};
use showroom_core::error::AppError;
use showroom_core::secret::SigningSecret;
use showroom_database::connection::DatabasePool;
use showroom_database::memory::{MemoryLinkRegistry, MemoryVisibilityStore};
use showroom_database::registry::LinkRegistry;
use showroom_database::repositories::{ShareLinkRepository, VisibilityRepository};
use showroom_database::visibility::VisibilityStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    // The signing secret is checked before anything else is built.
    let secret = match config.signing_secret() {
        Ok(secret) => secret,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start without a usable signing secret");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config, secret).await {
        if e.is_fatal() {
            tracing::error!(error = %e, "Startup aborted");
        } else {
            tracing::error!("Server error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("SHOWROOM_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let env = std::env::var("SHOWROOM_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig, secret: SigningSecret) -> Result<(), AppError> {
    tracing::info!("Starting Showroom v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Template catalog ─────────────────────────────────
    let catalog = showroom_service::catalog::load_catalog(&config.catalog.path).await?;

    // ── Step 2: Storage backends ─────────────────────────────────
    let (registry, visibility, db_pool): (
        Arc<dyn LinkRegistry>,
        Arc<dyn VisibilityStore>,
        Option<DatabasePool>,
    ) = match config.database.backend {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let db_pool = DatabasePool::connect(&config.database).await?;

            tracing::info!("Running database migrations...");
            showroom_database::migration::run_migrations(db_pool.pool()).await?;
            tracing::info!("Database migrations complete");

            (
                Arc::new(ShareLinkRepository::new(db_pool.pool().clone())),
                Arc::new(VisibilityRepository::new(db_pool.pool().clone())),
                Some(db_pool),
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; share links are lost on restart");
            (
                Arc::new(MemoryLinkRegistry::new()),
                Arc::new(MemoryVisibilityStore::new()),
                None,
            )
        }
    };

    // ── Step 3: Build and start HTTP server ──────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app_state = AppState::new(config, &secret, catalog, registry, visibility);
    let app = showroom_api::build_app(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Showroom server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(db_pool) = db_pool {
        if tokio::time::timeout(grace, db_pool.close()).await.is_err() {
            tracing::warn!("Database pool did not close within the shutdown grace period");
        }
    }

    tracing::info!("Showroom server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
