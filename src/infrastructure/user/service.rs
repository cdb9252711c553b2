//! User service for account management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    require_credentials, require_name, validate_password, NewUser, UserProfile, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

pub const USER_ALREADY_EXISTS: &str = "Usuário já existe";
pub const USER_NOT_FOUND: &str = "Usuário não encontrado";

/// Request for creating a new user
///
/// Fields are optional so that absent values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Request for updating a user's display name
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
}

/// User service for account management
#[derive(Debug)]
pub struct UserService<R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> UserService<R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized + 'static,
{
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user
    ///
    /// Validation runs before any store call. The duplicate pre-check and the
    /// insert are not atomic; a concurrent insert of the same login is still
    /// reported as a conflict by the store.
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserProfile, DomainError> {
        let (login, password) = require_credentials(request.username, request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        validate_password(&password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.find_by_login(&login).await?.is_some() {
            debug!(login = %login, "Rejecting duplicate login");
            return Err(DomainError::conflict(USER_ALREADY_EXISTS));
        }

        let password_hash = self.hash_password(password).await?;

        let user = self
            .repository
            .insert(NewUser {
                login,
                password_hash,
                name: request.name,
            })
            .await
            .map_err(|e| match e {
                DomainError::Conflict { .. } => DomainError::conflict(USER_ALREADY_EXISTS),
                other => other,
            })?;

        info!(id = %user.id(), login = %user.login(), "User created");

        Ok(user.profile())
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        self.repository.list().await
    }

    /// Update the display name of a user
    pub async fn update(
        &self,
        login: &str,
        request: UpdateUserRequest,
    ) -> Result<UserProfile, DomainError> {
        let name = require_name(request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        let user = self
            .repository
            .update_name_by_login(login, &name)
            .await
            .map_err(user_not_found)?;

        info!(login = %login, "User updated");

        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, login: &str) -> Result<(), DomainError> {
        self.repository
            .delete_by_login(login)
            .await
            .map_err(user_not_found)?;

        info!(login = %login, "User deleted");

        Ok(())
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }

    /// bcrypt and Argon2 are CPU-bound; keep them off the async workers.
    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
    }
}

fn user_not_found(err: DomainError) -> DomainError {
    match err {
        DomainError::NotFound { .. } => DomainError::not_found(USER_NOT_FOUND),
        other => other,
    }
}
