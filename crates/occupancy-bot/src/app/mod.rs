//! Application wiring
//!
//! Builds every collaborator from configuration and runs the bot loop until
//! a shutdown signal arrives.

use occupancy_common::{read_token_file, AppConfig, AppResult};
use occupancy_core::{PresenceTracker, Roster, RosterSource, TrackerConfig};
use occupancy_store::CsvRosterSource;
use std::sync::Arc;

use crate::runner::{BotLoop, Cadence};
use crate::scan::{CommandScanner, RetryPolicy, ScanInvoker};
use crate::transport::{SlackRtmTransport, SlackSettings};

/// Load the roster from the configured source
pub fn load_roster(config: &AppConfig) -> AppResult<Roster> {
    let source = CsvRosterSource::new(config.roster.path.clone());
    let records = source.load()?;
    Ok(Roster::new(records))
}

/// Build the scan invoker from the configured command and retry policy
pub fn create_invoker(config: &AppConfig) -> ScanInvoker {
    let scanner = CommandScanner::new(config.scan.program.clone(), config.scan.args.clone());
    ScanInvoker::new(Arc::new(scanner), RetryPolicy::from(&config.scan))
}

/// Create a bot loop with all its collaborators
pub fn create_bot(config: &AppConfig) -> AppResult<BotLoop<SlackRtmTransport>> {
    let token = read_token_file(&config.slack.token_file)?;
    let roster = load_roster(config)?;

    let transport = SlackRtmTransport::new(SlackSettings {
        api_base: config.slack.api_base.clone(),
        token,
        bot_user_id: config.slack.bot_user_id.clone(),
    })?;

    let tracker = PresenceTracker::new(TrackerConfig {
        miss_threshold: config.presence.miss_threshold,
    });

    tracing::info!(
        roster_size = roster.len(),
        scan_command = %config.scan.command_line(),
        max_attempts = config.scan.max_attempts,
        "Bot created"
    );

    Ok(BotLoop::new(
        transport,
        create_invoker(config),
        tracker,
        roster,
        Cadence::from(&config.bot),
    ))
}

/// Run the complete bot with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let mut bot = create_bot(&config)?;
    bot.run(shutdown_signal()).await?;
    Ok(())
}

/// Resolves on ctrl-c, or SIGTERM on unix
///
/// If a handler cannot be installed that branch never resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
