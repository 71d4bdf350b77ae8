mod root;
mod state;

pub(crate) use state::{FeedState, FeedStatus, PriceFlash};

pub use root::App;
