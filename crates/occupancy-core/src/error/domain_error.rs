//! Domain errors - failures of the roster source, the scanner, and the chat transport

use thiserror::Error;

// =========================================================================
// Roster loading
// =========================================================================

/// Roster source missing or malformed (fatal at startup)
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster is missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid status {value:?} in roster row {row} (expected 0 or 1)")]
    InvalidStatus { row: usize, value: String },

    #[error("Malformed roster row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}

// =========================================================================
// Network scan
// =========================================================================

/// Network discovery failure (non-fatal, the cycle degrades to "nothing observed")
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Failed to run scan command {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("Scan command exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("Scan failed {attempts} times in a row, last error: {last}")]
    RetriesExhausted { attempts: u32, last: String },
}

// =========================================================================
// Chat transport
// =========================================================================

/// Chat transport failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Failed to read events: {0}")]
    Read(String),

    #[error("Failed to send message: {0}")]
    Send(String),

    #[error("Transport closed")]
    Closed,
}

impl LoadError {
    /// Get an error code string for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "ROSTER_IO",
            Self::MissingColumn(_) => "ROSTER_MISSING_COLUMN",
            Self::InvalidStatus { .. } => "ROSTER_INVALID_STATUS",
            Self::Malformed { .. } => "ROSTER_MALFORMED",
        }
    }
}

impl ScanError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Spawn { .. } => "SCAN_SPAWN",
            Self::CommandFailed { .. } => "SCAN_COMMAND_FAILED",
            Self::RetriesExhausted { .. } => "SCAN_RETRIES_EXHAUSTED",
        }
    }
}

impl TransportError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Connect(_) => "TRANSPORT_CONNECT",
            Self::Read(_) => "TRANSPORT_READ",
            Self::Send(_) => "TRANSPORT_SEND",
            Self::Closed => "TRANSPORT_CLOSED",
        }
    }
}

/// Result type for roster loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for network scans
pub type ScanResult<T> = Result<T, ScanError>;

/// Result type for chat transport operations
pub type TransportResult<T> = Result<T, TransportError>;
