//! Chat transports
//!
//! Slack's real-time messaging API: events arrive over a websocket opened
//! by `rtm.connect`, replies go out through `chat.postMessage`.

mod frame;
mod slack_api;
mod slack_rtm;

pub use frame::parse_frame;
pub use slack_api::{PostMessageRequest, RtmConnectResponse, SlackApiResponse, SlackSelf};
pub use slack_rtm::{SlackRtmTransport, SlackSettings};
