//! Test fixtures and data generators
//!
//! Provides reusable rosters and scan listings for integration tests.

use std::io::Write;

use occupancy_core::{HardwareAddress, IdentityRecord, Roster, Visibility};
use tempfile::NamedTempFile;

/// A roster file in the on-disk format, with an extra column that is ignored
pub const ROSTER_CSV: &str = "\
Name,Mac Address,Status,Hours
Alice,AA:BB:CC:00:00:01,0,12
Bob,aa:bb:cc:00:00:02,0,3
,aa:bb:cc:00:00:03,1,40
";

/// Write roster contents to a temporary file
pub fn write_roster(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// One public and one anonymous identity
pub fn alice_roster() -> Roster {
    Roster::new(vec![
        IdentityRecord::new("Alice", HardwareAddress::new("aa:bb"), Visibility::Public),
        IdentityRecord::new("", HardwareAddress::new("cc:dd"), Visibility::Anonymous),
    ])
}

/// A listing shaped like `arp-scan -l` output containing the given addresses
pub fn arp_listing(addresses: &[&str]) -> String {
    let mut listing = String::from(
        "Interface: eth0, type: EN10MB, MAC: 02:42:ac:11:00:02, IPv4: 192.168.1.10\n\
         Starting arp-scan 1.10.0 with 256 hosts (https://github.com/royhills/arp-scan)\n",
    );
    for (i, address) in addresses.iter().enumerate() {
        listing.push_str(&format!("192.168.1.{}\t{address}\tUnknown vendor\n", i + 20));
    }
    listing.push_str(&format!(
        "\n{} packets received by filter, 0 packets dropped by kernel\n",
        addresses.len()
    ));
    listing
}
