//! Roster source implementations

mod csv_roster;

pub use csv_roster::{
    parse_roster, CsvRosterSource, MAC_ADDRESS_COLUMN, NAME_COLUMN, STATUS_COLUMN,
};
