//! Ports implemented by infrastructure crates

mod ports;

pub use ports::{ChatTransport, NetworkScanner, RosterSource};
