//! Database migration command.

use crate::commands::create_db_pool;
use crate::output;
use showroom_core::config::{AppConfig, StorageBackend};
use showroom_core::error::AppError;

/// Execute migrations against the configured PostgreSQL database
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend != StorageBackend::Postgres {
        return Err(AppError::configuration(
            "Migrations require database.backend = \"postgres\"",
        ));
    }

    let pool = create_db_pool(config).await?;
    showroom_database::migration::run_migrations(pool.pool()).await?;
    pool.close().await;

    output::print_success("Migrations applied successfully");
    Ok(())
}
