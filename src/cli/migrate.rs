//! Migrate command - applies the schema and exits

use tracing::info;

use crate::domain::DomainError;
use crate::infrastructure::storage::{connect_pool, run_storage_migrations, StorageConfig};

/// Apply pending migrations against the configured database
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let pg_config = match config.storage_config()? {
        StorageConfig::Postgres(pg_config) => pg_config,
        StorageConfig::InMemory => {
            return Err(DomainError::configuration(
                "Migrations require the postgres storage backend",
            )
            .into());
        }
    };

    let pool = connect_pool(&pg_config).await?;
    let result = run_storage_migrations(&pool).await;
    pool.close().await;

    match result? {
        Some(version) => info!(version, "Database schema is up to date"),
        None => info!("No migrations applied"),
    }

    Ok(())
}
