mod snapshot_feed;

pub use snapshot_feed::{FeedEvent, FeedSource, parse_event, spawn_feed};
