//! Roster loading from disk into a running bot
//!
//! Run with: cargo test -p integration-tests --test roster_tests

use integration_tests::{arp_listing, write_roster, TestBot, ROSTER_CSV};
use occupancy_core::{LoadError, Roster, RosterSource, Visibility, UNIDENTIFIED_PRESENT_MESSAGE};
use occupancy_store::CsvRosterSource;

fn load(contents: &str) -> Result<Roster, LoadError> {
    let file = write_roster(contents);
    CsvRosterSource::new(file.path()).load().map(Roster::new)
}

#[test]
fn test_load_roster_file() {
    let roster = load(ROSTER_CSV).unwrap();

    assert_eq!(roster.len(), 3);
    let alice = roster.get(0).unwrap();
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.hardware_address.as_str(), "aa:bb:cc:00:00:01");
    assert_eq!(alice.visibility, Visibility::Public);
    assert!(!alice.is_present());

    let anonymous = roster.get(2).unwrap();
    assert_eq!(anonymous.name, "");
    assert_eq!(anonymous.visibility, Visibility::Anonymous);
}

#[test]
fn test_missing_column_is_rejected() {
    let err = load("Name,Status\nAlice,0\n").unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("Mac Address")));
}

#[test]
fn test_bad_status_reports_the_row() {
    let err = load("Name,Mac Address,Status\nAlice,aa:bb,0\nBob,cc:dd,2\n").unwrap_err();
    match err {
        LoadError::InvalidStatus { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_blank_address_is_rejected() {
    let err = load("Name,Mac Address,Status\nAlice,,0\n").unwrap_err();
    assert!(matches!(err, LoadError::Malformed { row: 1, .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CsvRosterSource::new(dir.path().join("total_hours.csv"))
        .load()
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[tokio::test]
async fn test_loaded_roster_answers_whois() {
    let mut test = TestBot::new(load(ROSTER_CSV).unwrap());

    test.scanner
        .push_listing(arp_listing(&["aa:bb:cc:00:00:02", "aa:bb:cc:00:00:03"]));
    test.ticks(1).await;
    assert_eq!(test.ask_whois().await.as_deref(), Some("Bob\n"));

    test.scanner.push_listing(arp_listing(&["aa:bb:cc:00:00:03"]));
    test.ticks(1).await;
    // Bob is within the miss tolerance
    assert_eq!(test.ask_whois().await.as_deref(), Some("Bob\n"));

    let mut anonymous_only = TestBot::new(load(ROSTER_CSV).unwrap());
    anonymous_only
        .scanner
        .push_listing(arp_listing(&["aa:bb:cc:00:00:03"]));
    anonymous_only.ticks(1).await;
    assert_eq!(
        anonymous_only.ask_whois().await.as_deref(),
        Some(UNIDENTIFIED_PRESENT_MESSAGE)
    );
}
