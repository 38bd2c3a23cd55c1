//! Bot token file
//!
//! The token is read once at startup. Line breaks are stripped so a file
//! written with a trailing newline still yields a usable token.

use std::path::Path;

/// Credential loading errors
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Failed to read token file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Token file {0} is empty")]
    Empty(String),
}

/// Read the bot token from a local secret file
///
/// # Errors
/// Returns an error if the file cannot be read or holds no token
pub fn read_token_file(path: &Path) -> Result<String, CredentialError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CredentialError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let token: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    let token = token.trim().to_string();

    if token.is_empty() {
        return Err(CredentialError::Empty(path.display().to_string()));
    }

    Ok(token)
}
