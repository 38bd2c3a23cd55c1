//! Chat event - one inbound record drained from the chat transport

use serde::Deserialize;

/// Inbound chat event
///
/// Every field is optional because the transport delivers many event kinds;
/// only events carrying `text` are treated as commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatEvent {
    #[serde(default)]
    pub text: Option<String>,
    /// Sender identity
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

impl ChatEvent {
    /// Create a text event from a user in a channel
    pub fn message(
        channel: impl Into<String>,
        user: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            text: Some(text.into()),
            user: Some(user.into()),
            channel: Some(channel.into()),
        }
    }

    /// Non-empty command text, if any
    pub fn command_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Check if the event was sent by the given identity
    pub fn is_from(&self, user_id: &str) -> bool {
        self.user.as_deref() == Some(user_id)
    }
}
