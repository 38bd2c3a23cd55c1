//! # occupancy-core
//!
//! Domain layer for the occupancy bot: identity records, the roster, the
//! hysteresis presence tracker, report rendering, and the ports the
//! infrastructure crates implement.
//! This crate has no dependencies on infrastructure (files, processes, network).

pub mod entities;
pub mod error;
pub mod events;
pub mod responder;
pub mod tracker;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{IdentityRecord, Roster};
pub use error::{
    LoadError, LoadResult, ScanError, ScanResult, TransportError, TransportResult,
};
pub use events::ChatEvent;
pub use responder::{
    render, Command, HELP_MESSAGE, NOBODY_OBSERVED_MESSAGE, UNIDENTIFIED_PRESENT_MESSAGE,
};
pub use tracker::{
    address_observed, PresenceTracker, ScanSummary, TrackerConfig, DEFAULT_MISS_THRESHOLD,
};
pub use traits::{ChatTransport, NetworkScanner, RosterSource};
pub use value_objects::{HardwareAddress, Visibility};
