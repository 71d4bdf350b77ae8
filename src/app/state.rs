// src/app/state.rs

use web_time::Instant;

use crate::config::FEED;
use crate::models::PriceMove;
use crate::ui::UI_TEXT;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FeedStatus {
    #[default]
    Waiting,
    Live,
    Closed,
}

impl FeedStatus {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            FeedStatus::Waiting => &UI_TEXT.feed_waiting,
            FeedStatus::Live => &UI_TEXT.feed_live,
            FeedStatus::Closed => &UI_TEXT.feed_closed,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FeedState {
    pub(crate) status: FeedStatus,
    pub(crate) snapshots: usize,
    pub(crate) last_rejection: Option<String>,
}

/// Fading highlight on the price card after an up/down move.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PriceFlash {
    since: Instant,
}

impl PriceFlash {
    pub(crate) fn new(movement: PriceMove) -> Option<Self> {
        (movement != PriceMove::Flat).then(|| Self {
            since: Instant::now(),
        })
    }

    /// 1.0 right after the move, 0.0 once `FEED.flash_duration` has passed.
    pub(crate) fn strength(&self) -> f32 {
        let elapsed = self.since.elapsed().as_secs_f32();
        let total = FEED.flash_duration.as_secs_f32();
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}
