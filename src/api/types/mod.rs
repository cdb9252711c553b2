//! Shared request/response types for the HTTP layer

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use json::Json;
