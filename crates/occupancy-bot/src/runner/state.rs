//! Loop state and cadence

use occupancy_common::BotConfig;
use std::time::Duration;

/// Connection state of the bot loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Transport connected, ticking normally
    Connected,
    /// Not (or no longer) connected; terminal for the run
    #[default]
    Disconnected,
}

impl LoopState {
    #[inline]
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Tick period and scan frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub tick_interval: Duration,
    /// A scan cycle runs on every Nth tick
    pub scan_every_ticks: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            scan_every_ticks: 5,
        }
    }
}

impl Cadence {
    /// Check if the given (1-based) tick runs a scan
    pub fn is_scan_tick(&self, tick: u64) -> bool {
        let every = u64::from(self.scan_every_ticks.max(1));
        tick % every == 0
    }
}

impl From<&BotConfig> for Cadence {
    fn from(config: &BotConfig) -> Self {
        Self {
            tick_interval: config.tick_interval(),
            scan_every_ticks: config.scan_every_ticks,
        }
    }
}
