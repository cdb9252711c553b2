//! Users API
//!
//! A small HTTP service exposing CRUD operations over user accounts:
//! - Logins are unique and immutable, names are editable
//! - Passwords are stored as bcrypt (or Argon2) hashes, never returned
//! - PostgreSQL or in-memory storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::{AppState, UserServiceTrait};
use domain::user::UserRepository;
use infrastructure::storage::{StorageFactory, UserStore};
use infrastructure::user::{create_hasher, PasswordHasher, UserService};

/// Build the application state from a repository and a hasher
pub fn build_app_state(
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
) -> AppState {
    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(repository, hasher));
    AppState::new(user_service)
}

/// Open the configured store and build the application state
///
/// The returned store must be closed on shutdown.
pub async fn create_app_state_with_config(
    config: &AppConfig,
) -> anyhow::Result<(AppState, UserStore)> {
    let storage_config = config.storage_config()?;
    info!(backend = ?storage_config.storage_type(), "Storage backend selected");

    let store =
        StorageFactory::create_user_store(&storage_config, config.storage.run_migrations).await?;

    info!(algorithm = ?config.hashing.algorithm, "Password hashing configured");
    let hasher = create_hasher(config.hashing.algorithm);

    let state = build_app_state(Arc::clone(&store.repository), hasher);

    Ok((state, store))
}
