pub mod events;
pub mod feed;

pub use events::EventService;
pub use feed::FeedService;
