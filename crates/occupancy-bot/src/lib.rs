//! # occupancy-bot
//!
//! Chat bot that reports who is in the lab: scans the local network on a
//! fixed cadence, tracks presence, and answers chat commands.

pub mod app;
pub mod runner;
pub mod scan;
pub mod transport;
