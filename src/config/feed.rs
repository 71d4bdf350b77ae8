use std::time::Duration;

pub struct FeedConfig {
    /// How often a file-backed feed checks the snapshot file for changes.
    pub poll_interval: Duration,
    /// How long the price card keeps its up/down flash after a render.
    pub flash_duration: Duration,
    /// Repaint cadence while nothing arrives, so the feed state stays current.
    pub idle_repaint: Duration,
    /// Half-width of the scalper window around the current price (0.03 = +/- 3%).
    /// The engine does the filtering; this only labels the Scalper View.
    pub scalper_range_pct: f64,
    /// ADX level the engine uses to split RANGING from TRENDING. Shown in the help tab.
    pub adx_trend_threshold: f64,
}

pub const FEED: FeedConfig = FeedConfig {
    poll_interval: Duration::from_secs(2),
    flash_duration: Duration::from_millis(900),
    idle_repaint: Duration::from_millis(500),
    scalper_range_pct: 0.03,
    adx_trend_threshold: 25.0,
};
