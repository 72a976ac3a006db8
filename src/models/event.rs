use std::sync::Arc;

use tokio::sync::mpsc;

use super::{Message, NoticeMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Live,
    Closed,
}

#[derive(Debug)]
pub enum Event {
    Notice(NoticeMessage),

    /// Result of the one-off bulk load. Empty when the fetch failed.
    TicketsLoaded(Vec<Message>),
    TicketArrived(Message),
    FeedStatus(FeedStatus),

    KeyboardUp,
    KeyboardDown,
    KeyboardHome,
    KeyboardEnd,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardF1,

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
    UiScrollPageUp,
    UiScrollPageDown,
}

impl Event {
    pub fn is_keyboard_event(&self) -> bool {
        matches!(
            self,
            Event::KeyboardUp
                | Event::KeyboardDown
                | Event::KeyboardHome
                | Event::KeyboardEnd
                | Event::KeyboardEnter
                | Event::KeyboardEsc
                | Event::KeyboardF1
                | Event::Quit
                | Event::UiScrollUp
                | Event::UiScrollDown
                | Event::UiScrollPageUp
                | Event::UiScrollPageDown
        )
    }

    pub fn is_feed_event(&self) -> bool {
        matches!(
            self,
            Event::TicketsLoaded(_) | Event::TicketArrived(_) | Event::FeedStatus(_)
        )
    }
}

#[async_trait::async_trait]
pub trait EventTx {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>>;
}

#[async_trait::async_trait]
impl EventTx for mpsc::Sender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event).await
    }
}

#[async_trait::async_trait]
impl EventTx for mpsc::UnboundedSender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event)
    }
}

pub type ArcEventTx = Arc<dyn EventTx + Send + Sync>;
