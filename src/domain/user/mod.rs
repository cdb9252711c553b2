//! User domain
//!
//! This module provides domain types and traits for user accounts,
//! including the user entity, validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId, UserProfile};
pub use repository::UserRepository;
pub use validation::{
    require_credentials, require_name, validate_password, UserValidationError,
    MIN_PASSWORD_LENGTH,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
