pub mod error;
pub mod realtime;
pub mod subscription;
pub mod supabase;

pub use error::FetchError;
pub use realtime::Realtime;
pub use subscription::Subscription;
pub use supabase::Supabase;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::{StoreConfig, verbose},
    models::{ArcEventTx, Message},
};
use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;

/// Read side of the ticket table plus its change feed.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait TicketStore {
    fn name(&self) -> &str;

    /// Fetches every row currently in the table.
    async fn load_all(&self) -> Result<Vec<Message>, FetchError>;

    /// Starts delivering inserted and updated rows as
    /// `Event::TicketArrived`, one event per row, until the returned
    /// subscription is released.
    async fn subscribe(&self, event_tx: ArcEventTx) -> Result<Subscription>;
}

pub type ArcTicketStore = Arc<dyn TicketStore + Send + Sync>;

pub fn new_store(config: &StoreConfig) -> Result<ArcTicketStore> {
    if config.url.trim().is_empty() {
        eyre::bail!("store url is not configured");
    }

    if config.api_key.as_deref().unwrap_or_default().is_empty() {
        log::warn!("No api key configured for store {}", config.url);
    }

    let store: Supabase = config.into();
    verbose!("  [+] Ticket store: {}/{}", store.endpoint(), config.table);
    Ok(Arc::new(store))
}
