//! The presentation surface as plain data.
//!
//! The renderer writes these types; the egui layer and the headless binary
//! only read them. Nothing here knows about markup.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::ui::UI_TEXT;

/// Color class for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Negative,
    Alert,
}

/// Additive color classes. When several apply, the last one added is painted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToneSet(Vec<Tone>);

impl ToneSet {
    pub fn single(tone: Tone) -> Self {
        Self(vec![tone])
    }

    pub fn add(&mut self, tone: Tone) {
        self.0.push(tone);
    }

    pub fn contains(&self, tone: Tone) -> bool {
        self.0.contains(&tone)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn effective(&self) -> Tone {
        self.0.last().copied().unwrap_or_default()
    }
}

/// Direction of the price relative to the previous render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PriceMove {
    Up,
    Down,
    #[default]
    Flat,
}

impl PriceMove {
    pub fn tone(&self) -> Tone {
        match self {
            PriceMove::Up => Tone::Positive,
            PriceMove::Down => Tone::Negative,
            PriceMove::Flat => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceCard {
    pub text: String,
    pub movement: PriceMove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCard {
    pub text: String,
    pub subtitle: Option<String>,
    pub tones: ToneSet,
}

impl TextCard {
    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subtitle: None,
            tones: ToneSet::default(),
        }
    }
}

/// The two independently rendered zone lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ZoneContainer {
    Macro,
    Scalper,
}

impl ZoneContainer {
    pub fn heading(&self) -> &'static str {
        match self {
            ZoneContainer::Macro => &UI_TEXT.zones_macro_heading,
            ZoneContainer::Scalper => &UI_TEXT.zones_scalper_heading,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ZoneContainer::Macro => &UI_TEXT.zones_macro_empty,
            ZoneContainer::Scalper => &UI_TEXT.zones_scalper_empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ZoneDirection {
    Support,
    Resistance,
}

impl ZoneDirection {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneDirection::Support => &UI_TEXT.zone_support_level,
            ZoneDirection::Resistance => &UI_TEXT.zone_resistance_level,
        }
    }

    pub fn side(&self) -> &'static str {
        match self {
            ZoneDirection::Support => &UI_TEXT.label_long,
            ZoneDirection::Resistance => &UI_TEXT.label_short,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ZoneDirection::Support => Tone::Positive,
            ZoneDirection::Resistance => Tone::Negative,
        }
    }
}

/// Fixed category buckets for grouped sources, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum SourceBucket {
    #[strum(to_string = "Key Levels")]
    KeyLevels,
    #[strum(to_string = "S/R Zones")]
    SrZones,
    Daily,
    Hourly,
    #[strum(to_string = "15m")]
    FifteenMin,
    #[strum(to_string = "5m")]
    FiveMin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    pub bucket: SourceBucket,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcesView {
    Flat(Vec<String>),
    Grouped(Vec<SourceGroup>),
}

impl SourcesView {
    /// One display line per tag (flat) or per non-empty bucket (grouped).
    pub fn lines(&self) -> Vec<String> {
        match self {
            SourcesView::Flat(tags) => tags.clone(),
            SourcesView::Grouped(groups) => groups
                .iter()
                .map(|g| format!("{}: {}", g.bucket, g.items.iter().join(", ")))
                .collect(),
        }
    }

    pub fn group(&self, bucket: SourceBucket) -> Option<&[String]> {
        match self {
            SourcesView::Flat(_) => None,
            SourcesView::Grouped(groups) => groups
                .iter()
                .find(|g| g.bucket == bucket)
                .map(|g| g.items.as_slice()),
        }
    }
}

/// Badge style for a zone's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConfidenceBadge {
    Safe,
    Caution,
    Risky,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCardView {
    pub price: f64,
    pub price_text: String,
    pub direction: ZoneDirection,
    pub score: f64,
    pub score_text: String,
    /// Score bar width in percent. Clamped at 100, never clamped below 0.
    pub fill_pct: f64,
    pub sources: SourcesView,
    pub confirmations: Option<String>,
    pub warnings: Option<String>,
    pub badge: ConfidenceBadge,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneListView {
    Placeholder(String),
    Cards(Vec<ZoneCardView>),
}

impl ZoneListView {
    pub fn cards(&self) -> &[ZoneCardView] {
        match self {
            ZoneListView::Placeholder(_) => &[],
            ZoneListView::Cards(cards) => cards,
        }
    }

    /// Number of elements in the container, counting a placeholder as one.
    pub fn element_count(&self) -> usize {
        match self {
            ZoneListView::Placeholder(_) => 1,
            ZoneListView::Cards(cards) => cards.len(),
        }
    }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub price: PriceCard,
    pub sentiment: TextCard,
    pub divergence: TextCard,
    pub regime: TextCard,
    pub volatility: String,
    pub macro_zones: ZoneListView,
    pub scalper_zones: ZoneListView,
    pub status: String,
}

impl Default for DashboardView {
    fn default() -> Self {
        let blank = UI_TEXT.value_placeholder.as_str();
        Self {
            price: PriceCard {
                text: blank.to_string(),
                movement: PriceMove::Flat,
            },
            sentiment: TextCard::plain(blank),
            divergence: TextCard::plain(blank),
            regime: TextCard::plain(blank),
            volatility: blank.to_string(),
            macro_zones: ZoneListView::Cards(Vec::new()),
            scalper_zones: ZoneListView::Cards(Vec::new()),
            status: UI_TEXT.status_initializing.clone(),
        }
    }
}

impl DashboardView {
    pub fn zones(&self, container: ZoneContainer) -> &ZoneListView {
        match container {
            ZoneContainer::Macro => &self.macro_zones,
            ZoneContainer::Scalper => &self.scalper_zones,
        }
    }

    pub(crate) fn zones_mut(&mut self, container: ZoneContainer) -> &mut ZoneListView {
        match container {
            ZoneContainer::Macro => &mut self.macro_zones,
            ZoneContainer::Scalper => &mut self.scalper_zones,
        }
    }
}
