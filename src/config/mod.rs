//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, HashAlgorithm, HashingConfig, LogFormat, LoggingConfig, ServerConfig,
    StorageSettings, DEFAULT_PORT,
};
