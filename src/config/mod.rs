//! Configuration module for the trade helper.

// Can all be private now because we have a public re-export.
mod debug;
mod feed;
mod persistence;
mod render;

// Re-export commonly used items
pub use debug::DF;
pub use feed::{FEED, FeedConfig};
pub use persistence::PERSISTENCE;
pub use render::{RENDER, RenderConfig, RenderPolicy, SourceLayout};
