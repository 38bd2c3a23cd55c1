//! # occupancy-common
//!
//! Shared utilities including configuration, error handling, credential loading, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{read_token_file, CredentialError};
pub use config::{
    AppConfig, AppSettings, BotConfig, ConfigError, Environment, PresenceConfig, RosterConfig,
    ScanConfig, SlackConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
