//! Slack Web API payloads

use serde::{Deserialize, Serialize};

/// Common envelope of every Web API response
#[derive(Debug, Clone, Deserialize)]
pub struct SlackApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SlackApiResponse {
    /// Turn an `ok: false` response into its error string
    pub fn into_result(self) -> Result<(), String> {
        if self.ok {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| "unknown_error".to_string()))
        }
    }
}

/// The connecting bot's identity
#[derive(Debug, Clone, Deserialize)]
pub struct SlackSelf {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `rtm.connect`
#[derive(Debug, Clone, Deserialize)]
pub struct RtmConnectResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "self")]
    pub self_: Option<SlackSelf>,
}

impl RtmConnectResponse {
    /// Websocket URL and bot identity, or the API error
    pub fn into_session(self) -> Result<(String, Option<SlackSelf>), String> {
        if !self.ok {
            return Err(self.error.unwrap_or_else(|| "unknown_error".to_string()));
        }
        let url = self.url.ok_or_else(|| "missing websocket url".to_string())?;
        Ok((url, self.self_))
    }
}

/// Form body of `chat.postMessage`
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub text: &'a str,
    /// Post as the bot user rather than as an app integration
    pub as_user: bool,
}
