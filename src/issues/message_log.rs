use std::collections::HashSet;

use crate::models::Message;

/// Append-only sequence of every message seen this session. Bulk-loaded
/// rows come first, live rows follow in delivery order.
///
/// Redelivered rows are kept as separate entries unless `dedup_by_id` is
/// enabled.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    messages: Vec<Message>,
    seen: HashSet<String>,
    dedup_by_id: bool,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dedup_by_id(mut self, dedup: bool) -> Self {
        self.dedup_by_id = dedup;
        self
    }

    /// Returns false when the message was dropped as a duplicate.
    pub fn append(&mut self, message: Message) -> bool {
        if self.dedup_by_id && !message.id().is_empty() && self.seen.contains(message.id()) {
            log::debug!("dropping redelivered message {}", message.id());
            return false;
        }
        self.seen.insert(message.id().to_string());
        self.messages.push(message);
        true
    }

    /// Appends a batch; returns how many messages were kept.
    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) -> usize {
        messages
            .into_iter()
            .map(|m| self.append(m))
            .filter(|kept| *kept)
            .count()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
