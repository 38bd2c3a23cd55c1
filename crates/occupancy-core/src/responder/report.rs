//! Occupancy report rendering

use crate::entities::Roster;

/// Reply when only anonymous identities are present
pub const UNIDENTIFIED_PRESENT_MESSAGE: &str = "People are in the lab.";

/// Reply when nobody is present
///
/// Absence of evidence from a sampled scan is not proof of absence, so the
/// reply asks the user to check again.
pub const NOBODY_OBSERVED_MESSAGE: &str =
    "I haven't seen anyone in the lab. Please try again to be sure!";

/// Render the occupancy report
///
/// Public identities that are present are listed one per line (each name
/// followed by a newline) in roster order. Anonymous identities never appear
/// by name.
pub fn render(roster: &Roster) -> String {
    let mut names = String::new();
    let mut anonymous_present = false;

    for record in roster.iter().filter(|r| r.is_present()) {
        if record.is_public() {
            names.push_str(&record.name);
            names.push('\n');
        } else {
            anonymous_present = true;
        }
    }

    if !names.is_empty() {
        names
    } else if anonymous_present {
        UNIDENTIFIED_PRESENT_MESSAGE.to_string()
    } else {
        NOBODY_OBSERVED_MESSAGE.to_string()
    }
}
