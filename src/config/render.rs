//! Rendering constants and the runtime render policy.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::models::SourceBucket;

pub struct RenderConfig {
    /// Score at which a zone's bar is full. Higher scores clamp to 100%.
    pub score_cap: f64,
    /// Decimal places for every price on the dashboard.
    pub price_decimals: usize,
    pub confirmation_separator: &'static str,
    pub warning_separator: &'static str,

    // --- Text markers the engine embeds in free-text fields ---
    pub bullish_marker: &'static str,
    pub bearish_marker: &'static str,
    pub ranging_marker: &'static str,
    pub trending_marker: &'static str,

    // --- Source bucketing rules, checked in this order ---
    pub sr_zone_marker: &'static str,
    pub key_level_markers: &'static [&'static str],
    pub timeframe_buckets: &'static [(&'static str, SourceBucket)],
}

pub const RENDER: RenderConfig = RenderConfig {
    score_cap: 25.0,
    price_decimals: 4,
    confirmation_separator: " ",
    warning_separator: " | ",

    bullish_marker: "Bullish",
    bearish_marker: "Bearish",
    ranging_marker: "RANGING",
    trending_marker: "TRENDING",

    sr_zone_marker: "S/R Zone",
    key_level_markers: &["PDL", "PDH", "PWL", "PWH", "PML", "PMH"],
    timeframe_buckets: &[
        ("1d", SourceBucket::Daily),
        ("1h", SourceBucket::Hourly),
        ("15m", SourceBucket::FifteenMin),
        ("5m", SourceBucket::FiveMin),
    ],
};

/// How zone sources are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum SourceLayout {
    /// Tags in the order the engine sent them.
    #[strum(to_string = "Flat")]
    Flat,
    /// Tags bucketed by category; unmatched tags are dropped.
    #[default]
    #[strum(to_string = "Grouped")]
    Grouped,
}

/// Presentation choices that differ between dashboard setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPolicy {
    /// Color the regime label green on RANGING and red on TRENDING.
    pub regime_coloring: bool,
    pub source_layout: SourceLayout,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            regime_coloring: false,
            source_layout: SourceLayout::Grouped,
        }
    }
}
