//! Command interpretation

use super::report::render;
use crate::entities::Roster;

/// Reply to any unrecognized input
pub const HELP_MESSAGE: &str =
    "Here are the following commands I support:\nwhois - prints people currently in the lab\n";

/// A parsed chat command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report who is currently present
    WhoIs,
    /// Anything else
    Help,
}

impl Command {
    /// The token that requests the occupancy report
    pub const WHOIS: &'static str = "whois";

    /// Parse raw chat text (trimmed, case-insensitive)
    pub fn parse(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case(Self::WHOIS) {
            Self::WhoIs
        } else {
            Self::Help
        }
    }

    /// Build the reply for this command
    pub fn respond(self, roster: &Roster) -> String {
        match self {
            Self::WhoIs => render(roster),
            Self::Help => HELP_MESSAGE.to_string(),
        }
    }
}
