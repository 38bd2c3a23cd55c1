//! Slack RTM transport
//!
//! `connect` calls `rtm.connect`, opens the returned websocket and spawns a
//! reader task that forwards parsed message frames into a channel.
//! `read_events` drains that channel without waiting, so the bot loop never
//! blocks on the socket.

use async_trait::async_trait;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use occupancy_core::{ChatEvent, ChatTransport, TransportError, TransportResult};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use super::frame::parse_frame;
use super::slack_api::{PostMessageRequest, RtmConnectResponse, SlackApiResponse};

/// Bound on every Web API request and on the websocket handshake
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Connection settings for the Slack transport
#[derive(Clone)]
pub struct SlackSettings {
    /// Web API base, e.g. `https://slack.com/api`
    pub api_base: String,
    pub token: String,
    /// Overrides the user id reported by `rtm.connect`
    pub bot_user_id: Option<String>,
}

impl std::fmt::Debug for SlackSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackSettings")
            .field("api_base", &self.api_base)
            .field("token", &"<redacted>")
            .field("bot_user_id", &self.bot_user_id)
            .finish()
    }
}

/// Slack real-time messaging transport
pub struct SlackRtmTransport {
    settings: SlackSettings,
    http: reqwest::Client,
    self_id: Option<String>,
    events: Option<mpsc::UnboundedReceiver<ChatEvent>>,
    sink: Option<WsSink>,
    reader: Option<JoinHandle<()>>,
}

impl SlackRtmTransport {
    /// Create a disconnected transport
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built (TLS backend unavailable).
    pub fn new(settings: SlackSettings) -> TransportResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let self_id = settings.bot_user_id.clone();
        Ok(Self {
            settings,
            http,
            self_id,
            events: None,
            sink: None,
            reader: None,
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{method}", self.settings.api_base)
    }

    async fn rtm_connect(&self) -> TransportResult<RtmConnectResponse> {
        self.http
            .post(self.endpoint("rtm.connect"))
            .bearer_auth(&self.settings.token)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?
            .error_for_status()
            .map_err(|e| TransportError::Connect(e.to_string()))?
            .json::<RtmConnectResponse>()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))
    }
}

/// Forward message frames from the socket until it closes
async fn read_frames<S>(mut stream: S, tx: mpsc::UnboundedSender<ChatEvent>)
where
    S: futures_util::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(event) = parse_frame(&text) {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(Message::Close(frame)) => {
                tracing::info!(frame = ?frame, "Slack closed the RTM connection");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "RTM websocket error");
                break;
            }
        }
    }
}

#[async_trait]
impl ChatTransport for SlackRtmTransport {
    async fn connect(&mut self) -> TransportResult<()> {
        let (url, me) = self
            .rtm_connect()
            .await?
            .into_session()
            .map_err(TransportError::Connect)?;

        if self.self_id.is_none() {
            self.self_id = me.as_ref().map(|s| s.id.clone());
        }

        let (socket, _) = tokio::time::timeout(REQUEST_TIMEOUT, connect_async(url.as_str()))
            .await
            .map_err(|_| TransportError::Connect("websocket handshake timed out".to_string()))?
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        // A previous session's reader is finished or stale
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        let (sink, stream) = socket.split();

        let (tx, rx) = mpsc::unbounded_channel();
        self.reader = Some(tokio::spawn(read_frames(stream, tx)));
        self.sink = Some(sink);
        self.events = Some(rx);

        tracing::info!(
            bot_user_id = ?self.self_id,
            bot_name = ?me.and_then(|s| s.name),
            "Connected to Slack RTM"
        );
        Ok(())
    }

    fn self_id(&self) -> Option<&str> {
        self.self_id.as_deref()
    }

    async fn read_events(&mut self) -> TransportResult<Vec<ChatEvent>> {
        let rx = self
            .events
            .as_mut()
            .ok_or_else(|| TransportError::Read("not connected".to_string()))?;

        let mut events = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if events.is_empty() {
                        return Err(TransportError::Closed);
                    }
                    break;
                }
            }
        }
        Ok(events)
    }

    async fn send_message(&mut self, channel: &str, text: &str) -> TransportResult<()> {
        let request = PostMessageRequest {
            channel,
            text,
            as_user: true,
        };

        self.http
            .post(self.endpoint("chat.postMessage"))
            .bearer_auth(&self.settings.token)
            .form(&request)
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?
            .json::<SlackApiResponse>()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?
            .into_result()
            .map_err(TransportError::Send)
    }

    async fn close(&mut self) -> TransportResult<()> {
        self.events = None;

        let result = match self.sink.take() {
            Some(mut sink) => sink
                .close()
                .await
                .map_err(|e| TransportError::Send(e.to_string())),
            None => Ok(()),
        };

        if let Some(reader) = self.reader.take() {
            reader.abort();
        }

        tracing::info!("Slack RTM connection closed");
        result
    }
}

impl Drop for SlackRtmTransport {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
    }
}
