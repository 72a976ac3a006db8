#[cfg(test)]
#[path = "grouping_test.rs"]
mod tests;

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::Message;

use super::IssueError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// All messages sharing one `group_id`, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueGroup {
    group_id: String,
    messages: Vec<Message>,
}

impl IssueGroup {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            messages: vec![],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn first_message(&self) -> Option<&Message> {
        self.messages.first()
    }

    /// The most recently arrived member, which is not necessarily the
    /// newest by timestamp.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Timestamp of the last-arrived member.
    pub fn last_update(&self) -> Result<DateTime<Utc>, IssueError> {
        parse_timestamp(self.last_message().and_then(|m| m.ts()))
    }

    /// Ordering key; a missing or unparseable timestamp sorts below any real
    /// one.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.last_update().unwrap_or_else(|err| {
            log::trace!("group {} sorts last: {}", self.group_id, err);
            DateTime::<Utc>::MIN_UTC
        })
    }
}

/// Partitions `messages` by `group_id` in a single pass. Groups appear in
/// the order their id was first seen and keep the arrival order of their
/// members.
pub fn group_by_group_id(messages: &[Message]) -> Vec<IssueGroup> {
    let mut groups: Vec<IssueGroup> = vec![];
    let mut index: HashMap<&str, usize> = HashMap::new();

    for message in messages {
        let pos = *index.entry(message.group_id()).or_insert_with(|| {
            groups.push(IssueGroup::new(message.group_id()));
            groups.len() - 1
        });
        groups[pos].push(message.clone());
    }
    groups
}

/// Sorts groups newest first by the timestamp of their last-arrived member.
/// The sort is stable, so ties keep their first-seen order.
pub fn order_groups(mut groups: Vec<IssueGroup>) -> Vec<IssueGroup> {
    groups.sort_by_cached_key(|g| std::cmp::Reverse(g.sort_key()));
    groups
}

pub fn parse_timestamp(ts: Option<&str>) -> Result<DateTime<Utc>, IssueError> {
    let raw = match ts.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(IssueError::MalformedTimestamp(None)),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Postgres renders timestamptz with a short offset like "+00".
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(IssueError::MalformedTimestamp(Some(raw.to_string())))
}
