#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;

use crate::backend::{FetchError, Realtime, Subscription, TicketStore};
use crate::config::{StoreConfig, user_agent};
use crate::models::{ArcEventTx, Message};
use async_trait::async_trait;
use eyre::{Context, Result};
use std::time;

/// PostgREST + Realtime client for the tickets table.
pub struct Supabase {
    alias: String,
    endpoint: String,
    api_key: Option<String>,
    schema: String,
    table: String,
    timeout: Option<time::Duration>,

    realtime: bool,
    heartbeat: time::Duration,
}

#[async_trait]
impl TicketStore for Supabase {
    fn name(&self) -> &str {
        &self.alias
    }

    async fn load_all(&self) -> Result<Vec<Message>, FetchError> {
        let mut req = reqwest::Client::new()
            .get(format!("{}/rest/v1/{}", self.endpoint, self.table))
            .query(&[("select", "*")])
            .header("User-Agent", user_agent())
            .header("Accept", "application/json")
            .header("Accept-Profile", &self.schema);

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        if let Some(key) = &self.api_key {
            req = req.header("apikey", key).bearer_auth(key);
        }

        let res = req.send().await?;

        if !res.status().is_success() {
            let code = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            log::error!("Store responded with {}: {}", code, body);
            return Err(FetchError::Status { code, body });
        }

        let body = res.text().await?;
        let rows = serde_json::from_str::<Vec<Message>>(&body)?;
        log::debug!("Fetched {} rows from {}", rows.len(), self.table);
        Ok(rows)
    }

    async fn subscribe(&self, event_tx: ArcEventTx) -> Result<Subscription> {
        let topic = format!("realtime:{}", self.table);
        if !self.realtime {
            log::info!("Realtime is disabled, not subscribing to {}", topic);
            return Ok(Subscription::inert(topic));
        }

        let realtime = Realtime::new(&self.endpoint, &self.schema, &self.table)
            .with_api_key(self.api_key.clone())
            .with_heartbeat(self.heartbeat);

        realtime
            .subscribe(event_tx)
            .await
            .wrap_err(format!("subscribing to {}", topic))
    }
}

impl From<&StoreConfig> for Supabase {
    fn from(value: &StoreConfig) -> Self {
        let mut store = Supabase::default()
            .with_endpoint(&value.url)
            .with_table(&value.table)
            .with_schema(&value.schema)
            .with_realtime(value.realtime.enabled)
            .with_heartbeat(time::Duration::from_secs(value.realtime.heartbeat_secs.max(1)));

        if let Some(api_key) = value.api_key.as_deref().filter(|k| !k.is_empty()) {
            store = store.with_api_key(api_key);
        }

        if let Some(timeout) = value.timeout_secs {
            store = store.with_timeout(time::Duration::from_secs(timeout as u64));
        }
        store
    }
}

impl Default for Supabase {
    fn default() -> Self {
        Self {
            alias: "supabase".to_string(),
            endpoint: String::new(),
            api_key: None,
            schema: crate::config::constants::TICKETS_SCHEMA.to_string(),
            table: crate::config::constants::TICKETS_TABLE.to_string(),
            timeout: None,
            realtime: true,
            heartbeat: time::Duration::from_secs(crate::config::constants::HEARTBEAT_SECS),
        }
    }
}

impl Supabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = schema.to_string();
        self
    }

    pub fn with_table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_realtime(mut self, enabled: bool) -> Self {
        self.realtime = enabled;
        self
    }

    pub fn with_heartbeat(mut self, heartbeat: time::Duration) -> Self {
        self.heartbeat = heartbeat;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Option<time::Duration> {
        self.timeout
    }
}
