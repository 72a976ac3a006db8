#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;

use eyre::Result;
use tokio_util::sync::CancellationToken;

use crate::backend::ArcTicketStore;
use crate::models::{ArcEventTx, Event, FeedStatus};
use crate::{error_notice, warn_notice};

/// Feeds the board: one bulk load, then the change feed until cancelled.
///
/// A failed bulk load is reported and treated as an empty table. The
/// subscription starts only after the load result was posted, so live rows
/// always land behind the loaded ones. Rows written between the bulk read
/// and the channel join are not replayed and only show up after a restart.
pub struct FeedService {
    store: ArcTicketStore,
    event_tx: ArcEventTx,
    cancel_token: CancellationToken,
}

impl FeedService {
    pub fn new(store: ArcTicketStore, event_tx: ArcEventTx, cancel_token: CancellationToken) -> Self {
        Self {
            store,
            event_tx,
            cancel_token,
        }
    }

    pub async fn run(self) -> Result<()> {
        let loaded = tokio::select! {
            _ = self.cancel_token.cancelled() => return Ok(()),
            res = self.store.load_all() => res,
        };

        let rows = match loaded {
            Ok(rows) => {
                log::info!("Loaded {} tickets from {}", rows.len(), self.store.name());
                rows
            }
            Err(err) => {
                log::error!("Failed to load tickets from {}: {}", self.store.name(), err);
                self.event_tx
                    .send(Event::Notice(error_notice!(format!(
                        "Failed to load tickets: {}",
                        err
                    ))))
                    .await?;
                vec![]
            }
        };
        self.event_tx.send(Event::TicketsLoaded(rows)).await?;

        let subscription = tokio::select! {
            _ = self.cancel_token.cancelled() => return Ok(()),
            res = self.store.subscribe(self.event_tx.clone()) => res,
        };

        let subscription = match subscription {
            Ok(subscription) => subscription,
            Err(err) => {
                log::error!("Failed to subscribe to {}: {:#}", self.store.name(), err);
                self.event_tx
                    .send(Event::Notice(warn_notice!(
                        "Live updates are unavailable, showing loaded tickets only"
                    )))
                    .await?;
                self.event_tx
                    .send(Event::FeedStatus(FeedStatus::Closed))
                    .await?;
                return Ok(());
            }
        };

        self.cancel_token.cancelled().await;
        subscription.release().await;
        Ok(())
    }
}
