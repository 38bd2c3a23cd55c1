//! Bot loop
//!
//! Drives the whole bot on one task: drains chat events every tick and runs a
//! scan cycle every few ticks.

mod bot_loop;
mod dispatch;
mod state;

pub use bot_loop::{BotLoop, TickOutcome};
pub use dispatch::{route, Reply};
pub use state::{Cadence, LoopState};
