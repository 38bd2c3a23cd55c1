//! Domain entities - core business objects

mod identity;
mod roster;

pub use identity::IdentityRecord;
pub use roster::Roster;
