//! # occupancy-store
//!
//! Roster store: reads the identity roster from its tabular source file.

pub mod sources;

pub use sources::{
    parse_roster, CsvRosterSource, MAC_ADDRESS_COLUMN, NAME_COLUMN, STATUS_COLUMN,
};
