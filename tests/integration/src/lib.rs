//! Integration test utilities for the occupancy bot
//!
//! This crate provides in-memory stand-ins for the chat transport and the
//! network scanner so the bot loop can be driven end to end.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
