//! Presence tracking - turns raw scan listings into occupancy judgments

mod matching;
mod presence_tracker;

pub use matching::address_observed;
pub use presence_tracker::{PresenceTracker, ScanSummary, TrackerConfig, DEFAULT_MISS_THRESHOLD};
