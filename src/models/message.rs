use serde::{Deserialize, Deserializer, Serialize};

/// A single ticket row as stored upstream. Rows are created once by the
/// ingestion side and never mutated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    channel: String,

    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    kind: String,

    #[serde(default)]
    relevance_score: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    group_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ts: Option<String>,
}

impl Message {
    pub fn new(id: impl Into<String>, group_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_relevance_score(mut self, score: f64) -> Self {
        self.relevance_score = Some(score);
        self
    }

    pub fn with_group_title(mut self, title: impl Into<String>) -> Self {
        self.group_title = Some(title.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_ts(mut self, ts: impl Into<String>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn relevance_score(&self) -> Option<f64> {
        self.relevance_score
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Title precomputed upstream, if any. Blank values count as absent.
    pub fn group_title(&self) -> Option<&str> {
        self.group_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    pub fn ts(&self) -> Option<&str> {
        self.ts.as_deref()
    }
}

// PostgREST sends explicit nulls for unset text columns.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
