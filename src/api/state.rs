//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{UserProfile, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{
    CreateUserRequest, PasswordHasher, UpdateUserRequest, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<UserProfile, DomainError>;
    async fn list(&self) -> Result<Vec<UserProfile>, DomainError>;
    async fn update(
        &self,
        login: &str,
        request: UpdateUserRequest,
    ) -> Result<UserProfile, DomainError>;
    async fn delete(&self, login: &str) -> Result<(), DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + ?Sized + 'static,
    H: PasswordHasher + ?Sized + 'static,
{
    async fn create(&self, request: CreateUserRequest) -> Result<UserProfile, DomainError> {
        UserService::create(self, request).await
    }

    async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        UserService::list(self).await
    }

    async fn update(
        &self,
        login: &str,
        request: UpdateUserRequest,
    ) -> Result<UserProfile, DomainError> {
        UserService::update(self, login, request).await
    }

    async fn delete(&self, login: &str) -> Result<(), DomainError> {
        UserService::delete(self, login).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        UserService::ping(self).await
    }
}
