//! Hardware (MAC) address as printed by the network scan tool

use std::fmt;

/// Canonical lowercase hardware address
///
/// The scan tool prints addresses in lowercase, so every address is folded to
/// lowercase (and trimmed) on construction. Matching against scan output is
/// case-sensitive on this canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HardwareAddress(String);

impl HardwareAddress {
    /// Create a canonical address from raw text
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the canonical string form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the address is empty
    ///
    /// An empty address is a substring of every line, so it would match any
    /// non-empty scan output.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HardwareAddress {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for HardwareAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
