//! Port traits - the collaborators the presence engine talks to
//!
//! The domain layer defines what it needs; the store and bot crates provide
//! the implementations (CSV file, external scan command, Slack).

use async_trait::async_trait;

use crate::entities::IdentityRecord;
use crate::error::{LoadResult, ScanResult, TransportResult};
use crate::events::ChatEvent;

// ============================================================================
// Roster Source
// ============================================================================

pub trait RosterSource {
    /// Load every identity record, in source order
    fn load(&self) -> LoadResult<Vec<IdentityRecord>>;
}

// ============================================================================
// Network Scanner
// ============================================================================

#[async_trait]
pub trait NetworkScanner: Send + Sync {
    /// Run one network discovery and return its raw textual listing
    async fn scan_once(&self) -> ScanResult<String>;
}

// ============================================================================
// Chat Transport
// ============================================================================

#[async_trait]
pub trait ChatTransport: Send {
    /// Open the connection
    ///
    /// Called again to reconnect after `read_events` reported `Closed`.
    async fn connect(&mut self) -> TransportResult<()>;

    /// The bot's own user id, known once connected
    fn self_id(&self) -> Option<&str>;

    /// Drain every pending inbound event without waiting for new ones
    ///
    /// Returns `TransportError::Closed` once the connection is gone and no
    /// buffered events remain.
    async fn read_events(&mut self) -> TransportResult<Vec<ChatEvent>>;

    /// Post a text reply to a channel
    async fn send_message(&mut self, channel: &str, text: &str) -> TransportResult<()>;

    /// Close the connection and release its resources
    async fn close(&mut self) -> TransportResult<()>;
}
