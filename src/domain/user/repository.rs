//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserProfile};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations report a missing record as [`DomainError::NotFound`] and a
/// duplicate login as [`DomainError::Conflict`]; anything else is
/// [`DomainError::Storage`].
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by login
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError>;

    /// List all users, ordered by id, without credentials
    async fn list(&self) -> Result<Vec<UserProfile>, DomainError>;

    /// Insert a new user and return it with its assigned id
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace the display name of the user with the given login
    async fn update_name_by_login(&self, login: &str, name: &str)
        -> Result<UserProfile, DomainError>;

    /// Delete the user with the given login
    async fn delete_by_login(&self, login: &str) -> Result<(), DomainError>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
