//! API middleware components

pub mod logging;
pub mod panic;

pub use logging::{logging_middleware, REQUEST_ID_HEADER};
pub use panic::handle_panic;
