//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
///
/// The messages are part of the public API contract and are returned
/// verbatim in error bodies.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Campos obrigatórios faltando: username e password")]
    MissingCredentials,

    #[error("Senha deve ter pelo menos {0} caracteres")]
    PasswordTooShort(usize),

    #[error("Campo 'name' é obrigatório")]
    MissingName,
}

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Require both a login and a password
///
/// Absent and empty values are treated the same way.
pub fn require_credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String), UserValidationError> {
    match (non_empty(username), non_empty(password)) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(UserValidationError::MissingCredentials),
    }
}

/// Validate a password
///
/// Rules:
/// - Minimum 6 characters, counted in UTF-16 code units
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Require a display name for updates
pub fn require_name(name: Option<String>) -> Result<String, UserValidationError> {
    non_empty(name).ok_or(UserValidationError::MissingName)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
