use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle on a running change-feed subscription.
///
/// `release` consumes the handle, so a subscription is released at most
/// once. Dropping it without releasing still cancels the feed, but does not
/// wait for the reader to finish.
#[derive(Debug)]
pub struct Subscription {
    topic: String,
    token: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn new(topic: impl Into<String>, token: CancellationToken, worker: JoinHandle<()>) -> Self {
        Self {
            topic: topic.into(),
            token,
            worker: Some(worker),
        }
    }

    /// A subscription that delivers nothing, used when the feed is disabled.
    pub fn inert(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            token: CancellationToken::new(),
            worker: None,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled() && self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    pub async fn release(mut self) {
        self.token.cancel();
        if let Some(worker) = self.worker.take() {
            if let Err(err) = worker.await {
                log::warn!("subscription {} ended abnormally: {}", self.topic, err);
            }
        }
        log::debug!("subscription {} released", self.topic);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
