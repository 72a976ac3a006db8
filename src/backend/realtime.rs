#[cfg(test)]
#[path = "realtime_test.rs"]
mod tests;

use std::time;

use eyre::{Context, Result, bail};
use futures::{SinkExt, StreamExt};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};
use tokio_util::sync::CancellationToken;

use crate::backend::Subscription;
use crate::models::{ArcEventTx, Event, FeedStatus, Message};
use crate::{error_notice, warn_notice};

const PHOENIX_TOPIC: &str = "phoenix";
const PROTOCOL_VERSION: &str = "1.0.0";
const JOIN_REF: &str = "1";

/// A Phoenix channel frame as spoken by the Realtime server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoenixFrame {
    pub topic: String,
    pub event: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_ref: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum FeedFrame {
    Joined,
    JoinFailed(String),
    Row(Box<Message>),
    ServerError(String),
    Closed,
    Ignored,
}

#[derive(Debug, Deserialize)]
struct ChangePayload {
    #[serde(default)]
    data: Option<ChangeData>,
    // Payload shape of the pre-2.0 protocol.
    #[serde(default, rename = "type")]
    change_type: Option<String>,
    #[serde(default)]
    record: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ChangeData {
    #[serde(rename = "type")]
    change_type: String,
    #[serde(default)]
    record: Option<Value>,
}

pub struct Realtime {
    endpoint: String,
    schema: String,
    table: String,
    api_key: Option<String>,
    heartbeat: time::Duration,
}

impl Realtime {
    pub fn new(endpoint: &str, schema: &str, table: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            schema: schema.to_string(),
            table: table.to_string(),
            api_key: None,
            heartbeat: time::Duration::from_secs(crate::config::constants::HEARTBEAT_SECS),
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_heartbeat(mut self, heartbeat: time::Duration) -> Self {
        self.heartbeat = heartbeat;
        self
    }

    pub fn topic(&self) -> String {
        format!("realtime:{}", self.table)
    }

    pub fn socket_url(&self) -> Result<String> {
        let mut url = Url::parse(&self.endpoint)
            .wrap_err(format!("parsing store url {}", self.endpoint))?;
        let scheme = match url.scheme() {
            "https" | "wss" => "wss",
            "http" | "ws" => "ws",
            other => bail!("unsupported store url scheme {}", other),
        };
        url.set_scheme(scheme)
            .map_err(|_| eyre::eyre!("switching {} to {}", self.endpoint, scheme))?;
        url.set_path("/realtime/v1/websocket");
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            if let Some(key) = self.api_key.as_deref() {
                query.append_pair("apikey", key);
            }
            query.append_pair("vsn", PROTOCOL_VERSION);
        }
        Ok(url.to_string())
    }

    pub fn join_frame(&self) -> PhoenixFrame {
        let mut payload = json!({
            "config": {
                "broadcast": { "ack": false, "self": false },
                "presence": { "key": "" },
                "postgres_changes": [
                    { "event": "*", "schema": self.schema, "table": self.table }
                ]
            }
        });
        if let Some(key) = self.api_key.as_deref() {
            payload["access_token"] = Value::String(key.to_string());
        }

        PhoenixFrame {
            topic: self.topic(),
            event: "phx_join".to_string(),
            payload,
            reference: Some(JOIN_REF.to_string()),
            join_ref: Some(JOIN_REF.to_string()),
        }
    }

    pub fn leave_frame(&self, reference: u64) -> PhoenixFrame {
        PhoenixFrame {
            topic: self.topic(),
            event: "phx_leave".to_string(),
            payload: json!({}),
            reference: Some(reference.to_string()),
            join_ref: Some(JOIN_REF.to_string()),
        }
    }

    pub fn heartbeat_frame(reference: u64) -> PhoenixFrame {
        PhoenixFrame {
            topic: PHOENIX_TOPIC.to_string(),
            event: "heartbeat".to_string(),
            payload: json!({}),
            reference: Some(reference.to_string()),
            join_ref: None,
        }
    }

    /// Connects, joins the table topic and spawns the reader. Rows arrive on
    /// `event_tx` until the subscription is released or the server closes
    /// the socket; the connection is not re-established.
    pub async fn subscribe(self, event_tx: ArcEventTx) -> Result<Subscription> {
        let url = self.socket_url()?;
        let topic = self.topic();
        log::debug!("Connecting realtime feed for {}", topic);
        event_tx.send(Event::FeedStatus(FeedStatus::Connecting)).await?;

        let (ws, _) = connect_async(url.as_str())
            .await
            .wrap_err("connecting realtime websocket")?;
        let (mut write, read) = ws.split();

        let join = serde_json::to_string(&self.join_frame()).wrap_err("encoding join frame")?;
        write
            .send(WsMessage::Text(join))
            .await
            .wrap_err("sending join frame")?;

        let token = CancellationToken::new();
        let child = token.clone();
        let worker_topic = topic.clone();
        let worker = tokio::spawn(async move {
            if let Err(err) = self.run(write, read, child, event_tx.clone()).await {
                log::error!("Realtime feed {} failed: {}", worker_topic, err);
                let _ = event_tx
                    .send(Event::Notice(error_notice!(format!(
                        "Live feed stopped: {}",
                        err
                    ))))
                    .await;
            }
            let _ = event_tx.send(Event::FeedStatus(FeedStatus::Closed)).await;
        });

        Ok(Subscription::new(topic, token, worker))
    }

    async fn run<W, R>(
        &self,
        mut write: W,
        mut read: R,
        token: CancellationToken,
        event_tx: ArcEventTx,
    ) -> Result<()>
    where
        W: futures::Sink<WsMessage, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
        R: futures::Stream<Item = Result<WsMessage, tokio_tungstenite::tungstenite::Error>>
            + Unpin,
    {
        let topic = self.topic();
        let mut next_ref: u64 = 2;
        let mut ticker = tokio::time::interval(self.heartbeat);
        // The first tick fires immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    let leave = serde_json::to_string(&self.leave_frame(next_ref))?;
                    if let Err(err) = write.send(WsMessage::Text(leave)).await {
                        log::debug!("Sending leave for {}: {}", topic, err);
                    }
                    let _ = write.close().await;
                    log::debug!("Realtime feed {} cancelled", topic);
                    return Ok(());
                }

                _ = ticker.tick() => {
                    let heartbeat = serde_json::to_string(&Self::heartbeat_frame(next_ref))?;
                    next_ref += 1;
                    write
                        .send(WsMessage::Text(heartbeat))
                        .await
                        .wrap_err("sending heartbeat")?;
                }

                frame = read.next() => {
                    let text = match frame {
                        None => {
                            log::warn!("Realtime socket for {} ended", topic);
                            return Ok(());
                        }
                        Some(Err(err)) => return Err(err).wrap_err("reading realtime socket"),
                        Some(Ok(WsMessage::Text(text))) => text,
                        Some(Ok(WsMessage::Close(frame))) => {
                            log::warn!("Realtime socket for {} closed: {:?}", topic, frame);
                            return Ok(());
                        }
                        Some(Ok(_)) => continue,
                    };

                    match parse_frame(&text, &topic) {
                        FeedFrame::Joined => {
                            log::info!("Subscribed to {}", topic);
                            event_tx.send(Event::FeedStatus(FeedStatus::Live)).await?;
                        }
                        FeedFrame::JoinFailed(reason) => bail!("joining {}: {}", topic, reason),
                        FeedFrame::Row(message) => {
                            log::debug!("Received row {} for group {}", message.id(), message.group_id());
                            event_tx.send(Event::TicketArrived(*message)).await?;
                        }
                        FeedFrame::ServerError(reason) => {
                            log::warn!("Realtime server reported: {}", reason);
                            event_tx
                                .send(Event::Notice(warn_notice!(format!("Live feed: {}", reason))))
                                .await?;
                        }
                        FeedFrame::Closed => {
                            log::warn!("Channel {} closed by server", topic);
                            return Ok(());
                        }
                        FeedFrame::Ignored => {}
                    }
                }
            }
        }
    }
}

/// Classifies one text frame received on the socket.
pub fn parse_frame(text: &str, topic: &str) -> FeedFrame {
    let frame = match serde_json::from_str::<PhoenixFrame>(text) {
        Ok(frame) => frame,
        Err(err) => {
            log::warn!("Skipping undecodable realtime frame: {}", err);
            return FeedFrame::Ignored;
        }
    };

    if frame.topic != topic {
        return FeedFrame::Ignored;
    }

    match frame.event.as_str() {
        "phx_reply" if frame.reference.as_deref() == Some(JOIN_REF) => {
            match frame.payload.get("status").and_then(Value::as_str) {
                Some("ok") => FeedFrame::Joined,
                _ => FeedFrame::JoinFailed(frame.payload["response"].to_string()),
            }
        }
        "postgres_changes" | "INSERT" | "UPDATE" => row_from_payload(frame.payload),
        "system" => match frame.payload.get("status").and_then(Value::as_str) {
            Some("error") => FeedFrame::ServerError(
                frame
                    .payload
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            ),
            _ => FeedFrame::Ignored,
        },
        "phx_error" | "phx_close" => FeedFrame::Closed,
        _ => FeedFrame::Ignored,
    }
}

// Only the new row of an insert or update is consumed.
fn row_from_payload(payload: Value) -> FeedFrame {
    let payload = match serde_json::from_value::<ChangePayload>(payload) {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("Skipping malformed change payload: {}", err);
            return FeedFrame::Ignored;
        }
    };

    let (change_type, record) = match payload.data {
        Some(data) => (data.change_type, data.record),
        None => (payload.change_type.unwrap_or_default(), payload.record),
    };

    if change_type != "INSERT" && change_type != "UPDATE" {
        return FeedFrame::Ignored;
    }

    let record = match record {
        Some(record) if record.as_object().is_some_and(|o| !o.is_empty()) => record,
        _ => return FeedFrame::Ignored,
    };

    match serde_json::from_value::<Message>(record) {
        Ok(message) => FeedFrame::Row(Box::new(message)),
        Err(err) => {
            log::warn!("Skipping undecodable row: {}", err);
            FeedFrame::Ignored
        }
    }
}
