//! Bot loop behavior: command handling, transport failures, shutdown
//!
//! Run with: cargo test -p integration-tests --test bot_loop_tests

use std::time::Duration;

use integration_tests::{alice_roster, arp_listing, SentMessage, TestBot, BOT_USER_ID};
use occupancy_bot::runner::{Cadence, LoopState, TickOutcome};
use occupancy_core::{ChatEvent, TransportError, HELP_MESSAGE, NOBODY_OBSERVED_MESSAGE};

// ============================================================================
// Commands
// ============================================================================

#[tokio::test]
async fn test_whois_reply_goes_to_the_asking_channel() {
    let mut test = TestBot::new(alice_roster());
    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UALICE", "whois")]);

    test.ticks(1).await;

    assert_eq!(
        test.transport.sent(),
        vec![SentMessage {
            channel: "CLAB".to_string(),
            text: NOBODY_OBSERVED_MESSAGE.to_string(),
        }]
    );
}

#[tokio::test]
async fn test_own_messages_never_get_replies() {
    let mut test = TestBot::new(alice_roster());
    test.transport.push_events(vec![
        ChatEvent::message("CLAB", BOT_USER_ID, "whois"),
        ChatEvent::message("CLAB", BOT_USER_ID, "anything else"),
    ]);

    test.ticks(1).await;

    assert!(test.transport.sent().is_empty());
}

#[tokio::test]
async fn test_help_text_is_independent_of_presence() {
    let mut test = TestBot::new(alice_roster());
    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UBOB", "who is here?")]);
    test.ticks(1).await;
    let before = test.transport.last_reply();

    test.scanner.push_listing(arp_listing(&["aa:bb", "cc:dd"]));
    test.ticks(1).await;
    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UBOB", "status")]);
    test.ticks(1).await;
    let after = test.transport.last_reply();

    assert_eq!(before.as_deref(), Some(HELP_MESSAGE));
    assert_eq!(after.as_deref(), Some(HELP_MESSAGE));
}

#[tokio::test]
async fn test_command_is_case_and_whitespace_insensitive() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["aa:bb"]));
    test.ticks(1).await;

    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UBOB", "  WhoIs \n")]);
    test.ticks(1).await;

    assert_eq!(test.transport.last_reply().as_deref(), Some("Alice\n"));
}

// ============================================================================
// Transport failures
// ============================================================================

#[tokio::test]
async fn test_read_failure_is_absorbed() {
    let mut test = TestBot::new(alice_roster());
    test.transport
        .push_error(TransportError::Read("unexpected frame".to_string()));
    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UBOB", "whois")]);

    test.bot.connect().await.unwrap();
    assert_eq!(test.bot.tick().await, TickOutcome::Continue);
    assert_eq!(test.bot.tick().await, TickOutcome::Continue);

    assert_eq!(test.transport.sent().len(), 1);
    // The failed read still scanned
    assert_eq!(test.scanner.calls(), 2);
}

#[tokio::test]
async fn test_send_failure_is_absorbed() {
    let mut test = TestBot::new(alice_roster());
    test.transport
        .fail_sends(TransportError::Send("channel_not_found".to_string()));
    test.transport
        .push_events(vec![ChatEvent::message("CGONE", "UBOB", "whois")]);

    test.bot.connect().await.unwrap();
    assert_eq!(test.bot.tick().await, TickOutcome::Continue);
    assert!(test.transport.sent().is_empty());
    assert_eq!(test.bot.state(), LoopState::Connected);
}

#[tokio::test]
async fn test_connect_failure_is_fatal() {
    let mut test = TestBot::new(alice_roster());
    test.transport
        .fail_connect(TransportError::Connect("invalid_auth".to_string()));

    let err = test.bot.run(std::future::pending()).await.unwrap_err();

    assert_eq!(err, TransportError::Connect("invalid_auth".to_string()));
    assert_eq!(test.bot.state(), LoopState::Disconnected);
    assert_eq!(test.bot.ticks(), 0);
    assert_eq!(test.scanner.calls(), 0);
}

#[tokio::test]
async fn test_closed_transport_reconnects() {
    let mut test = TestBot::new(alice_roster());
    test.transport.push_events(Vec::new());
    test.transport.push_error(TransportError::Closed);
    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UBOB", "whois")]);

    test.ticks(3).await;

    assert_eq!(test.transport.connects(), 2);
    assert_eq!(test.transport.sent().len(), 1);
    assert_eq!(test.scanner.calls(), 3);
    assert_eq!(test.bot.state(), LoopState::Connected);
}

#[tokio::test]
async fn test_scans_continue_while_reconnect_fails() {
    let mut test = TestBot::new(alice_roster());
    test.scanner.push_listing(arp_listing(&["aa:bb"]));
    test.ticks(1).await;

    test.transport.push_error(TransportError::Closed);
    test.transport
        .fail_connect(TransportError::Connect("ratelimited".to_string()));
    for _ in 0..3 {
        assert_eq!(test.bot.tick().await, TickOutcome::Disconnected);
    }
    assert_eq!(test.scanner.calls(), 4);
    assert_eq!(test.bot.roster().get(0).unwrap().miss_count(), 3);

    test.transport.allow_connect();
    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UBOB", "whois")]);
    assert_eq!(test.bot.tick().await, TickOutcome::Continue);
    assert_eq!(test.transport.last_reply().as_deref(), Some("Alice\n"));
}

// ============================================================================
// Cadence and shutdown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_run_scans_on_cadence_and_closes_on_shutdown() {
    let mut test = TestBot::with_cadence(alice_roster(), Cadence::default());
    test.scanner.push_listing(arp_listing(&["aa:bb"]));

    // Ticks fire at 0s through 5s, the fifth one (at 4s) scans
    test.bot
        .run(tokio::time::sleep(Duration::from_millis(5500)))
        .await
        .unwrap();

    assert_eq!(test.bot.ticks(), 6);
    assert_eq!(test.scanner.calls(), 1);
    assert!(test.bot.roster().get(0).unwrap().is_present());
    assert!(test.transport.is_closed());
    assert!(!test.transport.is_connected());
    assert_eq!(test.bot.state(), LoopState::Disconnected);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_is_not_blocked_by_a_hung_reply() {
    let mut test = TestBot::new(alice_roster());
    test.transport.hang_sends();
    test.transport
        .push_events(vec![ChatEvent::message("CLAB", "UBOB", "whois")]);

    let finished = tokio::time::timeout(
        Duration::from_secs(3600),
        test.bot.run(tokio::time::sleep(Duration::from_millis(100))),
    )
    .await;

    assert!(matches!(finished, Ok(Ok(()))));
    assert!(test.transport.is_closed());
    assert_eq!(test.bot.ticks(), 1);
}
