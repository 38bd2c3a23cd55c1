//! Application error types
//!
//! Unified error handling for the startup path. Steady-state failures (scan,
//! transport read) are absorbed by the bot loop and never become an `AppError`.

use occupancy_core::{LoadError, TransportError};

use crate::auth::CredentialError;
use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Roster error: {0}")]
    Load(#[from] LoadError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl AppError {
    /// Get error code for diagnostics
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Credential(_) => "CREDENTIAL_ERROR",
            Self::Load(e) => e.code(),
            Self::Transport(e) => e.code(),
        }
    }

    /// Process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Credential(_) => 2,
            Self::Load(_) | Self::Transport(_) => 1,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
