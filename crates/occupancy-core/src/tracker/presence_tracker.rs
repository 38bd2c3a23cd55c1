//! Hysteresis presence tracker
//!
//! Each scan cycle marks every roster entry found or missing. A positive
//! observation makes an identity present immediately; an identity is only
//! declared gone after more than `miss_threshold` consecutive misses, so a
//! single flaky scan never flips anyone's status.

use super::matching::address_observed;
use crate::entities::Roster;

/// Default number of consecutive misses tolerated before departure
pub const DEFAULT_MISS_THRESHOLD: u32 = 5;

/// Configuration for the presence tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Consecutive missed cycles tolerated while still reporting presence
    pub miss_threshold: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            miss_threshold: DEFAULT_MISS_THRESHOLD,
        }
    }
}

/// Counts describing one scan cycle, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Identities seen in this cycle
    pub observed: usize,
    /// Identities not seen in this cycle
    pub missing: usize,
    /// Identities that became present in this cycle
    pub arrived: usize,
    /// Identities that became absent in this cycle
    pub departed: usize,
}

/// Applies scan listings to a roster
#[derive(Debug, Clone, Default)]
pub struct PresenceTracker {
    config: TrackerConfig,
    cycles: u64,
}

impl PresenceTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self { config, cycles: 0 }
    }

    /// Number of scan cycles applied so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Apply one scan listing to every roster entry
    ///
    /// An empty listing (e.g. after the scanner gave up) counts as a cycle in
    /// which nobody was observed.
    pub fn scan_cycle(&mut self, roster: &mut Roster, raw_scan_text: &str) -> ScanSummary {
        self.cycles += 1;
        let mut summary = ScanSummary::default();

        for record in roster.iter_mut() {
            if address_observed(&record.hardware_address, raw_scan_text) {
                summary.observed += 1;
                if record.mark_observed() {
                    summary.arrived += 1;
                    tracing::info!(identity = %record.name, "Identity arrived");
                }
            } else {
                summary.missing += 1;
                if record.mark_missed(self.config.miss_threshold) {
                    summary.departed += 1;
                    tracing::info!(
                        identity = %record.name,
                        miss_count = record.miss_count(),
                        "Identity departed"
                    );
                }
            }
        }

        tracing::debug!(
            cycle = self.cycles,
            observed = summary.observed,
            missing = summary.missing,
            arrived = summary.arrived,
            departed = summary.departed,
            "Scan cycle applied"
        );

        summary
    }
}
