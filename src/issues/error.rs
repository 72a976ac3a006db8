use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueError {
    #[error("malformed timestamp: {0:?}")]
    MalformedTimestamp(Option<String>),

    #[error("derived title is empty")]
    EmptyDerivedTitle,

    #[error("invalid keyword pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
