//! Storage factory for runtime storage selection

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

use super::migrations::run_storage_migrations;
use super::postgres::{connect_pool, PostgresConfig};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL storage configuration
    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Opened user store: the repository plus the pool backing it, if any
#[derive(Debug, Clone)]
pub struct UserStore {
    pub repository: Arc<dyn UserRepository>,
    pool: Option<PgPool>,
}

impl UserStore {
    /// Store backed by process memory
    pub fn in_memory() -> Self {
        Self {
            repository: Arc::new(InMemoryUserRepository::new()),
            pool: None,
        }
    }

    /// Close the connection pool, waiting for checked-out connections
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("PostgreSQL pool closed");
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates the user store based on the configuration
    pub async fn create_user_store(
        config: &StorageConfig,
        run_migrations: bool,
    ) -> Result<UserStore, DomainError> {
        match config {
            StorageConfig::InMemory => Ok(UserStore::in_memory()),
            StorageConfig::Postgres(pg_config) => {
                let pool = connect_pool(pg_config).await?;

                if run_migrations {
                    run_storage_migrations(&pool).await?;
                }

                Ok(UserStore {
                    repository: Arc::new(PostgresUserRepository::new(pool.clone())),
                    pool: Some(pool),
                })
            }
        }
    }
}
