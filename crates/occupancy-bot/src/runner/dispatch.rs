//! Routing inbound chat events to replies

use occupancy_core::{ChatEvent, Command, Roster};

/// An outbound reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub channel: String,
    pub text: String,
}

/// Decide the reply for one inbound event
///
/// Events without text produce nothing. Events sent by the bot itself are
/// never answered, which keeps the bot from replying to its own replies.
pub fn route(event: &ChatEvent, self_id: Option<&str>, roster: &Roster) -> Option<Reply> {
    let text = event.command_text()?;

    if self_id.is_some_and(|id| event.is_from(id)) {
        tracing::trace!("Ignoring own message");
        return None;
    }

    let input = text.trim().to_lowercase();
    tracing::debug!(user = ?event.user, input = %input, "Received user input");

    let Some(channel) = event.channel.as_deref() else {
        tracing::debug!(user = ?event.user, "Event has no channel to reply to");
        return None;
    };

    Some(Reply {
        channel: channel.to_string(),
        text: Command::parse(&input).respond(roster),
    })
}
