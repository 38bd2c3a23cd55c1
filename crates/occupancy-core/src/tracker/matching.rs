//! Matching a hardware address against raw scan output

use crate::value_objects::HardwareAddress;

/// Check if the address appears on any line of the scan listing
///
/// This is a plain case-sensitive substring match against the canonical
/// lowercase address. An address that is a substring of another address (or
/// of unrelated noise on a line) will match too.
pub fn address_observed(address: &HardwareAddress, raw_scan_text: &str) -> bool {
    raw_scan_text
        .lines()
        .any(|line| line.contains(address.as_str()))
}
