//! User infrastructure module
//!
//! This module provides implementations for user management, including
//! password hashing (bcrypt, Argon2), PostgreSQL and in-memory repositories,
//! and the user service.

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{create_hasher, Argon2Hasher, BcryptHasher, PasswordHasher, BCRYPT_COST};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{
    CreateUserRequest, UpdateUserRequest, UserService, USER_ALREADY_EXISTS, USER_NOT_FOUND,
};
