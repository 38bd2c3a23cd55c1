//! Visibility class of a tracked identity

use std::fmt;

/// Whether an identity is named in occupancy reports
///
/// The roster file stores this as an integer status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Named explicitly in reports (status 0)
    #[default]
    Public,
    /// Only contributes to the aggregate "someone is here" answer (status 1)
    Anonymous,
}

impl Visibility {
    /// Create a `Visibility` from the roster status code
    #[must_use]
    pub fn from_status(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Public),
            1 => Some(Self::Anonymous),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Anonymous => f.write_str("anonymous"),
        }
    }
}
