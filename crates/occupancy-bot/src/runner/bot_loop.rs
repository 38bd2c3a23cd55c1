//! The cadence loop
//!
//! Every tick drains pending chat events and answers them; every
//! `scan_every_ticks`-th tick also runs one scan cycle. Everything happens on
//! the loop's own task, so a scan cycle's read-then-write over the roster is
//! never interleaved with rendering a report.

use occupancy_core::{
    ChatEvent, ChatTransport, PresenceTracker, Roster, ScanSummary, TransportError,
    TransportResult,
};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use super::dispatch::{route, Reply};
use super::state::{Cadence, LoopState};
use crate::scan::ScanInvoker;

/// Upper bound on closing the transport during shutdown
const CLOSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection state left behind by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The transport is down; the next tick tries to reconnect
    Disconnected,
}

/// Owns the roster and drives the transport, the scanner and the tracker
pub struct BotLoop<T: ChatTransport> {
    transport: T,
    invoker: ScanInvoker,
    tracker: PresenceTracker,
    roster: Roster,
    cadence: Cadence,
    state: LoopState,
    ticks: u64,
}

impl<T: ChatTransport> BotLoop<T> {
    pub fn new(
        transport: T,
        invoker: ScanInvoker,
        tracker: PresenceTracker,
        roster: Roster,
        cadence: Cadence,
    ) -> Self {
        Self {
            transport,
            invoker,
            tracker,
            roster,
            cadence,
            state: LoopState::Disconnected,
            ticks: 0,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Connect the transport
    ///
    /// # Errors
    /// A failed connection leaves the loop disconnected and is fatal for the run.
    pub async fn connect(&mut self) -> TransportResult<()> {
        if let Err(e) = self.transport.connect().await {
            self.state = LoopState::Disconnected;
            tracing::error!(error = %e, code = e.code(), "Connection failed");
            return Err(e);
        }

        self.state = LoopState::Connected;
        if self.transport.self_id().is_none() {
            tracing::warn!("Bot user id unknown, own messages cannot be filtered");
        }
        Ok(())
    }

    /// Run one cadence tick
    ///
    /// Transport trouble never ends the tick early: a lost connection is
    /// retried and the scan still runs on schedule.
    pub async fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;

        if !self.state.is_connected() {
            self.reconnect().await;
        }

        let events = if self.state.is_connected() {
            self.drain_events().await
        } else {
            Vec::new()
        };

        for event in &events {
            self.handle_event(event).await;
        }

        if self.cadence.is_scan_tick(self.ticks) {
            self.scan_cycle().await;
        }

        if self.state.is_connected() {
            TickOutcome::Continue
        } else {
            TickOutcome::Disconnected
        }
    }

    async fn drain_events(&mut self) -> Vec<ChatEvent> {
        match self.transport.read_events().await {
            Ok(events) => events,
            Err(TransportError::Closed) => {
                tracing::warn!(tick = self.ticks, "Chat transport closed, reconnecting");
                self.state = LoopState::Disconnected;
                self.reconnect().await;
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(tick = self.ticks, error = %e, "Failed to read chat events");
                Vec::new()
            }
        }
    }

    async fn reconnect(&mut self) {
        match self.transport.connect().await {
            Ok(()) => {
                self.state = LoopState::Connected;
                tracing::info!(tick = self.ticks, "Reconnected to chat transport");
            }
            Err(e) => {
                tracing::warn!(tick = self.ticks, error = %e, "Reconnect failed, retrying next tick");
            }
        }
    }

    /// Answer one inbound event, returning the reply that was attempted
    ///
    /// A failed send is logged and otherwise ignored.
    pub async fn handle_event(&mut self, event: &ChatEvent) -> Option<Reply> {
        let reply = route(event, self.transport.self_id(), &self.roster)?;

        if let Err(e) = self
            .transport
            .send_message(&reply.channel, &reply.text)
            .await
        {
            tracing::warn!(channel = %reply.channel, error = %e, "Failed to send reply");
        }

        Some(reply)
    }

    /// Scan the network and apply the result to the roster
    ///
    /// A scan that fails every attempt is applied as an empty listing, so
    /// every identity's miss count still advances. The roster is only
    /// written once the listing is in hand.
    pub async fn scan_cycle(&mut self) -> ScanSummary {
        let listing = match self.invoker.run_scan().await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::error!(error = %e, code = e.code(), "Network scan failed");
                String::new()
            }
        };

        self.tracker.scan_cycle(&mut self.roster, &listing)
    }

    /// Connect, then tick until `shutdown` resolves
    ///
    /// `shutdown` also interrupts a connect or a tick stuck on I/O. The
    /// transport is closed on the way out.
    ///
    /// # Errors
    /// Returns the connection error if the initial connect fails.
    pub async fn run<F>(&mut self, shutdown: F) -> TransportResult<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        tokio::select! {
            () = &mut shutdown => {
                tracing::info!("Shutdown requested while connecting");
                self.shutdown().await;
                return Ok(());
            }
            connected = self.connect() => connected?,
        }

        tracing::info!(
            tick_interval_ms = self.cadence.tick_interval.as_millis(),
            scan_every_ticks = self.cadence.scan_every_ticks,
            roster_size = self.roster.len(),
            "Bot loop started"
        );

        let mut interval = tokio::time::interval(self.cadence.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = interval.tick() => {}
            }
            tokio::select! {
                () = &mut shutdown => break,
                _ = self.tick() => {}
            }
        }

        tracing::info!("Shutdown requested");
        self.shutdown().await;
        Ok(())
    }

    async fn shutdown(&mut self) {
        match tokio::time::timeout(CLOSE_TIMEOUT, self.transport.close()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "Failed to close chat transport cleanly"),
            Err(_) => tracing::warn!("Timed out closing chat transport"),
        }
        self.state = LoopState::Disconnected;
        tracing::info!(ticks = self.ticks, "Bot loop stopped");
    }
}
