pub mod event;
pub mod message;
pub mod notice;

pub use event::{ArcEventTx, Event, EventTx, FeedStatus};
pub use message::Message;
pub use notice::*;
