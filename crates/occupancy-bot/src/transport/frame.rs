//! RTM websocket frames

use occupancy_core::ChatEvent;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RtmFrame {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(flatten)]
    event: ChatEvent,
}

/// Parse one text frame into a chat event
///
/// Only `message` frames become events; `hello`, presence changes, pongs and
/// anything that is not valid JSON are dropped.
pub fn parse_frame(text: &str) -> Option<ChatEvent> {
    let frame: RtmFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::trace!(error = %e, "Ignoring unparseable RTM frame");
            return None;
        }
    };

    (frame.kind.as_deref() == Some("message")).then_some(frame.event)
}
