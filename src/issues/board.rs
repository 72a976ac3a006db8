#[cfg(test)]
#[path = "board_test.rs"]
mod tests;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::constants::FALLBACK_TITLE;
use crate::models::Message;

use super::{IssueGroup, KeywordSets, MessageLog, group_by_group_id, order_groups, title_for_group};

/// One rendered issue thread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueView {
    pub group_id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub last_update: Option<DateTime<Utc>>,
    pub latest_type: String,
}

impl IssueView {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn latest_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// First eight characters of the group id, for display.
    pub fn short_id(&self) -> &str {
        match self.group_id.char_indices().nth(8) {
            Some((idx, _)) => &self.group_id[..idx],
            None => &self.group_id,
        }
    }
}

/// Owns the message log and the ordered views derived from it. Views are
/// rebuilt from scratch after every change to the log.
pub struct IssueBoard {
    log: MessageLog,
    keywords: KeywordSets,
    fallback_title: String,
    views: Vec<IssueView>,
}

impl IssueBoard {
    pub fn new(keywords: KeywordSets) -> Self {
        Self {
            log: MessageLog::new(),
            keywords,
            fallback_title: FALLBACK_TITLE.to_string(),
            views: vec![],
        }
    }

    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self.refresh();
        self
    }

    pub fn with_dedup_by_id(mut self, dedup: bool) -> Self {
        self.log = self.log.with_dedup_by_id(dedup);
        self
    }

    /// Adds the bulk-loaded rows ahead of anything appended later.
    pub fn load(&mut self, messages: Vec<Message>) {
        let kept = self.log.extend(messages);
        log::debug!("loaded {} messages into the board", kept);
        self.refresh();
    }

    /// Appends a live row. Returns false when it was dropped as a duplicate.
    pub fn push(&mut self, message: Message) -> bool {
        if !self.log.append(message) {
            return false;
        }
        self.refresh();
        true
    }

    pub fn views(&self) -> &[IssueView] {
        &self.views
    }

    #[cfg(test)]
    pub fn view(&self, group_id: &str) -> Option<&IssueView> {
        self.views.iter().find(|v| v.group_id == group_id)
    }

    pub fn position(&self, group_id: &str) -> Option<usize> {
        self.views.iter().position(|v| v.group_id == group_id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn message_count(&self) -> usize {
        self.log.len()
    }

    fn refresh(&mut self) {
        self.views = order_groups(group_by_group_id(self.log.messages()))
            .into_iter()
            .map(|g| self.build_view(g))
            .collect();
    }

    fn build_view(&self, group: IssueGroup) -> IssueView {
        let title = title_for_group(group.messages(), &self.keywords).unwrap_or_else(|err| {
            log::debug!("group {}: {}, using fallback title", group.group_id(), err);
            self.fallback_title.clone()
        });
        let last_update = group.last_update().ok();
        let latest_type = group
            .last_message()
            .map(|m| m.kind().to_string())
            .unwrap_or_default();

        IssueView {
            group_id: group.group_id().to_string(),
            title,
            last_update,
            latest_type,
            messages: group.into_messages(),
        }
    }
}
