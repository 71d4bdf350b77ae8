use std::sync::LazyLock;

use crate::config::FEED;

pub const ICON_WARNING: &str = "⚠";
pub const ICON_UP: &str = "⏶";
pub const ICON_DOWN: &str = "⏷";

pub struct UiText {
    // --- Window / header ---
    pub app_title: String,
    pub window_title: String,

    // --- Tabs ---
    pub tab_macro: String,
    pub tab_scalper: String,
    pub tab_help: String,

    // --- Metric cards ---
    pub card_price: String,
    pub card_sentiment: String,
    pub card_divergence: String,
    pub card_regime: String,
    pub value_placeholder: String,
    pub status_initializing: String,

    // --- Zone containers ---
    pub zones_macro_heading: String,
    pub zones_scalper_heading: String,
    pub zones_macro_empty: String,
    pub zones_scalper_empty: String,

    // --- Zone cards ---
    pub zone_support_level: String,
    pub zone_resistance_level: String,
    pub label_long: String,
    pub label_short: String,
    pub label_confluence_score: String,
    pub badge_safe: String,
    pub badge_caution: String,
    pub badge_risky: String,

    // --- Status bar ---
    pub feed_waiting: String,
    pub feed_live: String,
    pub feed_closed: String,
    pub feed_rejected: String,
    pub label_snapshots: String,

    // --- Settings ---
    pub label_regime_colors: String,
    pub label_sources: String,

    // --- Help tab ---
    pub help_sections: Vec<(String, String)>,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| {
    let scalper_pct = FEED.scalper_range_pct * 100.0;
    let adx = FEED.adx_trend_threshold;

    UiText {
        app_title: "Trade Helper".to_string(),
        window_title: "Trade Helper - Confluence Zones".to_string(),

        tab_macro: "Macro View".to_string(),
        tab_scalper: "Scalper View".to_string(),
        tab_help: "Help & Info".to_string(),

        card_price: "Current Price".to_string(),
        card_sentiment: "Sentiment".to_string(),
        card_divergence: "RSI Divergence".to_string(),
        card_regime: "Market Regime (1h ADX)".to_string(),
        value_placeholder: "---".to_string(),
        status_initializing: "Initializing...".to_string(),

        zones_macro_heading: "Top Potential Entry Zones (Macro)".to_string(),
        zones_scalper_heading: format!("Nearby Entry Zones (+/- {:.1}%)", scalper_pct),
        zones_macro_empty: "No confluence zones found yet. Scanning...".to_string(),
        zones_scalper_empty: "No zones near the current price. Scanning...".to_string(),

        zone_support_level: "Support Level".to_string(),
        zone_resistance_level: "Resistance Level".to_string(),
        label_long: format!("LONG {}", ICON_UP),
        label_short: format!("SHORT {}", ICON_DOWN),
        label_confluence_score: "Confluence Score".to_string(),
        badge_safe: "SAFE".to_string(),
        badge_caution: "CAUTION".to_string(),
        badge_risky: "RISKY".to_string(),

        feed_waiting: "Waiting for snapshots".to_string(),
        feed_live: "Live".to_string(),
        feed_closed: "Feed closed".to_string(),
        feed_rejected: format!("{} Last payload rejected:", ICON_WARNING),
        label_snapshots: "snapshots".to_string(),

        label_regime_colors: "Regime colors".to_string(),
        label_sources: "Sources".to_string(),

        help_sections: vec![
            (
                "How This Tool Works".to_string(),
                "This tool shows high-probability bounce zones where multiple technical indicators converge. The analysis runs elsewhere; this dashboard renders its latest snapshot.".to_string(),
            ),
            (
                "Macro View".to_string(),
                "The highest conviction support and resistance zones based on long-term data (up to 90 days). These are major structural levels, but may be far from the current price. Ideal for swing trading or identifying major market turning points.".to_string(),
            ),
            (
                "Scalper View".to_string(),
                format!(
                    "Only the zones within +/- {:.1}% of the current price. These are the most immediately actionable levels for short-term scalping and intraday trading.",
                    scalper_pct
                ),
            ),
            (
                "Sentiment".to_string(),
                "A quick score of current market sentiment: price vs 1h 200 EMA (+/- 2 pts), price vs 5m VWAP (+/- 1 pt), 5m 21/50 EMA cross (+/- 1 pt).".to_string(),
            ),
            (
                "RSI Divergence".to_string(),
                "An early warning of a potential reversal. Bullish: price makes a lower low, RSI makes a higher low. Bearish: price makes a higher high, RSI makes a lower high.".to_string(),
            ),
            (
                "Market Regime (1h ADX)".to_string(),
                format!(
                    "Measures the strength of the 1-hour trend. RANGING (ADX < {adx}) is good for bounce trading. TRENDING (ADX > {adx}) is dangerous for bounce trading; levels are more likely to break."
                ),
            ),
            (
                "How is the Score Calculated?".to_string(),
                "A weighted sum of all indicators in a zone. Higher timeframe and multi-touch S/R zones are weighted much more heavily than low timeframe indicators. The bar is full at a score of 25.".to_string(),
            ),
            (
                "Confidence Badges".to_string(),
                "SAFE (high confidence), CAUTION (medium) and RISKY (anything lower). Zones without a confidence rating are shown as SAFE.".to_string(),
            ),
        ],
    }
});
