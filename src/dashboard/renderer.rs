//! Snapshot -> presentation surface.

use strum::IntoEnumIterator;

use crate::config::{RENDER, RenderPolicy};
use crate::dashboard::zones::render_zone_list;
use crate::models::{
    DashboardView, PriceCard, PriceMove, Sentiment, Snapshot, SnapshotError, TextCard, Tone,
    ToneSet, ZoneContainer,
};
use crate::utils::{format_number, format_price};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Re-renders the whole dashboard from each snapshot.
///
/// The only state carried between renders is the previous price, which
/// decides the up/down flash. It starts at zero, so the first real price
/// always renders as a move up.
#[derive(Debug, Clone, Default)]
pub struct DashboardRenderer {
    previous_price: f64,
    policy: RenderPolicy,
    surface: DashboardView,
}

impl DashboardRenderer {
    pub fn new(policy: RenderPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Seed the price the next render compares against.
    pub fn with_previous_price(mut self, price: f64) -> Self {
        self.previous_price = price;
        self
    }

    pub fn view(&self) -> &DashboardView {
        &self.surface
    }

    pub fn policy(&self) -> &RenderPolicy {
        &self.policy
    }

    /// Takes effect on the next render.
    pub fn set_policy(&mut self, policy: RenderPolicy) {
        self.policy = policy;
    }

    pub fn previous_price(&self) -> f64 {
        self.previous_price
    }

    /// Replace the surface with `snapshot`. An invalid snapshot leaves the
    /// surface and the stored price untouched.
    pub fn render(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;

        self.surface.price = self.price_card(snapshot.current_price);
        self.surface.sentiment = sentiment_card(&snapshot.sentiment);
        self.surface.divergence = divergence_card(&snapshot.divergence_status);
        self.surface.regime = regime_card(
            &snapshot.market_regime,
            &snapshot.market_warnings,
            self.policy.regime_coloring,
        );
        self.surface.volatility = snapshot.volatility.clone();

        for container in ZoneContainer::iter() {
            *self.surface.zones_mut(container) = render_zone_list(
                container,
                snapshot.entries(container),
                snapshot.current_price,
                &self.policy,
            );
        }

        self.surface.status = snapshot.status.clone();

        #[cfg(debug_assertions)]
        if DF.log_render {
            log::info!(
                "Rendered {} ({}) | macro {} | scalper {}",
                self.surface.price.text,
                self.surface.price.movement,
                self.surface.macro_zones.element_count(),
                self.surface.scalper_zones.element_count(),
            );
        }

        Ok(())
    }

    fn price_card(&mut self, price: f64) -> PriceCard {
        let movement = if price > self.previous_price {
            PriceMove::Up
        } else if price < self.previous_price {
            PriceMove::Down
        } else {
            PriceMove::Flat
        };
        self.previous_price = price;
        PriceCard {
            text: format_price(price),
            movement,
        }
    }
}

fn sentiment_card(sentiment: &Sentiment) -> TextCard {
    let tone = if sentiment.score > 0.0 {
        Tone::Positive
    } else if sentiment.score < 0.0 {
        Tone::Negative
    } else {
        Tone::Neutral
    };
    TextCard {
        text: sentiment.description.clone(),
        subtitle: Some(format!("({})", format_number(sentiment.score))),
        tones: ToneSet::single(tone),
    }
}

fn divergence_card(status: &str) -> TextCard {
    let mut card = TextCard::plain(status);
    if status.contains(RENDER.bullish_marker) {
        card.tones.add(Tone::Positive);
    }
    if status.contains(RENDER.bearish_marker) {
        card.tones.add(Tone::Negative);
    }
    card
}

/// The first market warning, when there is one, takes the regime's place.
fn regime_card(regime: &str, warnings: &[String], regime_coloring: bool) -> TextCard {
    if let Some(warning) = warnings.first() {
        return TextCard {
            text: warning.clone(),
            subtitle: None,
            tones: ToneSet::single(Tone::Alert),
        };
    }
    let mut card = TextCard::plain(regime);
    if regime_coloring {
        if regime.contains(RENDER.ranging_marker) {
            card.tones.add(Tone::Positive);
        }
        if regime.contains(RENDER.trending_marker) {
            card.tones.add(Tone::Negative);
        }
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ZoneDirection, ZoneEntry, ZoneListView};
    use serde_json::json;

    fn snapshot(price: f64) -> Snapshot {
        let value = json!({
            "current_price": price,
            "sentiment": { "description": "Bullish", "score": 2 },
            "divergence_status": "Bullish on 5m",
            "market_regime": "RANGING (18.2)",
            "volatility": "Volatility: 0.42%",
            "status": "Last updated: 10:15:00",
            "potential_entries": [
                { "price": 95.0, "score": 21, "sources": ["1d PDL", "1h EMA 200"] },
                { "price": 105.0, "score": 40, "sources": ["S/R Zone 105"], "confidence": "Medium" }
            ],
            "scalper_entries": []
        });
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_initial_surface_is_placeholder() {
        let renderer = DashboardRenderer::default();
        assert_eq!(renderer.view().price.text, "---");
        assert_eq!(renderer.view().status, "Initializing...");
    }

    #[test]
    fn test_price_flash_sequence() {
        let mut renderer = DashboardRenderer::default();

        renderer.render(&snapshot(100.0)).unwrap();
        assert_eq!(renderer.view().price.text, "$100.0000");

        renderer.render(&snapshot(105.0)).unwrap();
        assert_eq!(renderer.view().price.movement, PriceMove::Up);

        renderer.render(&snapshot(105.0)).unwrap();
        assert_eq!(renderer.view().price.movement, PriceMove::Flat);

        renderer.render(&snapshot(102.0)).unwrap();
        assert_eq!(renderer.view().price.movement, PriceMove::Down);
        assert_eq!(renderer.previous_price(), 102.0);
    }

    #[test]
    fn test_first_render_is_up() {
        let mut renderer = DashboardRenderer::default();
        renderer.render(&snapshot(0.5)).unwrap();
        assert_eq!(renderer.view().price.movement, PriceMove::Up);

        let mut seeded = DashboardRenderer::default().with_previous_price(1.0);
        seeded.render(&snapshot(0.5)).unwrap();
        assert_eq!(seeded.view().price.movement, PriceMove::Down);
    }

    #[test]
    fn test_rerender_is_idempotent_except_flash() {
        let mut renderer = DashboardRenderer::default();
        let snap = snapshot(100.0);
        renderer.render(&snap).unwrap();
        let first = renderer.view().clone();
        renderer.render(&snap).unwrap();
        let second = renderer.view().clone();

        assert_eq!(first.price.movement, PriceMove::Up);
        assert_eq!(second.price.movement, PriceMove::Flat);
        assert_eq!(first.price.text, second.price.text);
        assert_eq!(first.sentiment, second.sentiment);
        assert_eq!(first.divergence, second.divergence);
        assert_eq!(first.regime, second.regime);
        assert_eq!(first.macro_zones, second.macro_zones);
        assert_eq!(first.scalper_zones, second.scalper_zones);
        assert_eq!(first.status, second.status);
    }

    #[test]
    fn test_sentiment_tone() {
        let card = |score: f64| {
            sentiment_card(&Sentiment {
                description: "x".into(),
                score,
            })
        };
        assert_eq!(card(5.0).tones.effective(), Tone::Positive);
        assert_eq!(card(-3.0).tones.effective(), Tone::Negative);
        assert_eq!(card(0.0).tones.effective(), Tone::Neutral);
        assert_eq!(card(-3.0).subtitle.as_deref(), Some("(-3)"));
    }

    #[test]
    fn test_divergence_tone() {
        assert_eq!(
            divergence_card("Bullish reversal").tones.effective(),
            Tone::Positive
        );
        assert_eq!(
            divergence_card("Bearish trap").tones.effective(),
            Tone::Negative
        );
        assert!(divergence_card("Neutral").tones.is_empty());

        // Both markers: both classes applied, the later one is painted
        let both = divergence_card("Bullish then Bearish");
        assert!(both.tones.contains(Tone::Positive));
        assert!(both.tones.contains(Tone::Negative));
        assert_eq!(both.tones.effective(), Tone::Negative);
    }

    #[test]
    fn test_regime_warning_overrides_label() {
        let warnings = vec!["Funding spike".to_string(), "Second".to_string()];
        let card = regime_card("RANGING (18.2)", &warnings, true);
        assert_eq!(card.text, "Funding spike");
        assert_eq!(card.tones.effective(), Tone::Alert);
    }

    #[test]
    fn test_regime_coloring_policy() {
        let plain = regime_card("TRENDING (31.0)", &[], false);
        assert_eq!(plain.text, "TRENDING (31.0)");
        assert!(plain.tones.is_empty());

        assert_eq!(
            regime_card("RANGING (18.2)", &[], true).tones.effective(),
            Tone::Positive
        );
        assert_eq!(
            regime_card("TRENDING (31.0)", &[], true).tones.effective(),
            Tone::Negative
        );
    }

    #[test]
    fn test_zone_lists_rendered_independently() {
        let mut renderer = DashboardRenderer::default();
        renderer.render(&snapshot(100.0)).unwrap();

        let view = renderer.view();
        let cards = view.zones(ZoneContainer::Macro).cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].direction, ZoneDirection::Support);
        assert_eq!(cards[1].direction, ZoneDirection::Resistance);
        assert_eq!(cards[1].fill_pct, 100.0);
        assert!(matches!(
            view.zones(ZoneContainer::Scalper),
            ZoneListView::Placeholder(_)
        ));
        assert_eq!(view.volatility, "Volatility: 0.42%");
        assert_eq!(view.status, "Last updated: 10:15:00");
    }

    #[test]
    fn test_invalid_snapshot_leaves_surface() {
        let mut renderer = DashboardRenderer::default();
        renderer.render(&snapshot(100.0)).unwrap();
        let before = renderer.view().clone();

        let mut bad = snapshot(120.0);
        bad.potential_entries.push(ZoneEntry {
            price: f64::INFINITY,
            score: 1.0,
            sources: vec![],
            confirmations: vec![],
            warnings: vec![],
            confidence: None,
        });
        assert!(renderer.render(&bad).is_err());
        assert_eq!(renderer.view(), &before);
        assert_eq!(renderer.previous_price(), 100.0);
    }

    #[test]
    fn test_policy_change_applies_next_render() {
        let mut renderer = DashboardRenderer::default();
        renderer.render(&snapshot(100.0)).unwrap();
        assert!(renderer.view().regime.tones.is_empty());

        renderer.set_policy(RenderPolicy {
            regime_coloring: true,
            ..Default::default()
        });
        renderer.render(&snapshot(100.0)).unwrap();
        assert_eq!(renderer.view().regime.tones.effective(), Tone::Positive);
    }
}
