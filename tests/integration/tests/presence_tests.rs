//! Presence tracking through the bot loop
//!
//! Scans run on every tick here so each tick is one scan cycle.
//!
//! Run with: cargo test -p integration-tests --test presence_tests

use integration_tests::{alice_roster, arp_listing, TestBot};
use occupancy_core::{NOBODY_OBSERVED_MESSAGE, UNIDENTIFIED_PRESENT_MESSAGE};

// ============================================================================
// Hysteresis
// ============================================================================

#[tokio::test]
async fn test_alice_scenario() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["aa:bb"]));

    // Scan 1 sees Alice
    test.ticks(1).await;
    let alice = test.bot.roster().get(0).unwrap();
    assert!(alice.is_present());
    assert_eq!(alice.miss_count(), 0);
    assert_eq!(test.ask_whois().await.as_deref(), Some("Alice\n"));

    // Scans 2 to 6 miss her, but five misses are tolerated
    test.ticks(5).await;
    let alice = test.bot.roster().get(0).unwrap();
    assert!(alice.is_present());
    assert_eq!(alice.miss_count(), 5);
    assert_eq!(test.ask_whois().await.as_deref(), Some("Alice\n"));

    // Scan 7 is one miss too many
    test.ticks(1).await;
    let alice = test.bot.roster().get(0).unwrap();
    assert!(!alice.is_present());
    assert_eq!(alice.miss_count(), 6);
    assert_eq!(
        test.ask_whois().await.as_deref(),
        Some(NOBODY_OBSERVED_MESSAGE)
    );
}

#[tokio::test]
async fn test_observation_resets_miss_count() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["aa:bb"]));
    test.scanner.push_listing(arp_listing(&[]));
    test.scanner.push_listing(arp_listing(&[]));
    test.scanner.push_listing(arp_listing(&["aa:bb"]));

    test.ticks(3).await;
    assert_eq!(test.bot.roster().get(0).unwrap().miss_count(), 2);

    test.ticks(1).await;
    let alice = test.bot.roster().get(0).unwrap();
    assert!(alice.is_present());
    assert_eq!(alice.miss_count(), 0);
}

#[tokio::test]
async fn test_never_seen_identity_keeps_counting() {
    let mut test = TestBot::new(alice_roster());
    test.ticks(10).await;

    let anonymous = test.bot.roster().get(1).unwrap();
    assert!(!anonymous.is_present());
    assert_eq!(anonymous.miss_count(), 10);
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_anonymous_presence_is_not_named() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["cc:dd"]));
    test.ticks(1).await;

    assert_eq!(
        test.ask_whois().await.as_deref(),
        Some(UNIDENTIFIED_PRESENT_MESSAGE)
    );
}

#[tokio::test]
async fn test_public_names_win_over_anonymous_count() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["cc:dd", "aa:bb"]));
    test.ticks(1).await;

    assert_eq!(test.ask_whois().await.as_deref(), Some("Alice\n"));
}

#[tokio::test]
async fn test_report_is_idempotent_between_scans() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["aa:bb"]));
    test.ticks(1).await;

    let first = test.ask_whois().await;
    let second = test.ask_whois().await;
    assert_eq!(first, second);
    assert_eq!(test.bot.roster().get(0).unwrap().miss_count(), 0);
}

// ============================================================================
// Scan failures
// ============================================================================

#[tokio::test]
async fn test_exhausted_scan_counts_as_nothing_observed() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["aa:bb"]));
    test.ticks(1).await;

    // Every one of the 20 attempts fails
    test.scanner.push_failures(20);
    test.ticks(1).await;

    assert_eq!(test.scanner.calls(), 21);
    let alice = test.bot.roster().get(0).unwrap();
    assert!(alice.is_present());
    assert_eq!(alice.miss_count(), 1);
}

#[tokio::test]
async fn test_transient_scan_failure_is_retried() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_failures(3);
    test.scanner.push_listing(arp_listing(&["aa:bb"]));

    let summary = test.bot.scan_cycle().await;

    assert_eq!(test.scanner.calls(), 4);
    assert_eq!(summary.observed, 1);
    assert_eq!(summary.arrived, 1);
    assert!(test.bot.roster().get(0).unwrap().is_present());
}
