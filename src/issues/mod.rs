pub mod board;
pub mod error;
pub mod grouping;
pub mod keywords;
pub mod message_log;
pub mod title;

pub use board::{IssueBoard, IssueView};
pub use error::IssueError;
pub use grouping::{IssueGroup, group_by_group_id, order_groups, parse_timestamp};
pub use keywords::{KeywordSet, KeywordSets};
pub use message_log::MessageLog;
pub use title::{derive_title, title_for_group};
