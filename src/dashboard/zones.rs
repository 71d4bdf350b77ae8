//! Zone card rendering for one container.

use itertools::Itertools;

use crate::config::{RENDER, RenderPolicy};
use crate::dashboard::sources::sources_view;
use crate::models::{
    Confidence, ConfidenceBadge, ZoneCardView, ZoneContainer, ZoneDirection, ZoneEntry,
    ZoneListView,
};
use crate::utils::{format_number, format_price};

/// Support when the level sits strictly below price; a tie counts as resistance.
pub(crate) fn zone_direction(current_price: f64, level: f64) -> ZoneDirection {
    if current_price > level {
        ZoneDirection::Support
    } else {
        ZoneDirection::Resistance
    }
}

/// Score bar width in percent. Clamped above at 100, deliberately not below 0.
pub(crate) fn score_fill_pct(score: f64) -> f64 {
    (score / RENDER.score_cap * 100.0).min(100.0)
}

pub(crate) fn confidence_badge(confidence: Option<&Confidence>) -> ConfidenceBadge {
    match confidence {
        None | Some(Confidence::High) => ConfidenceBadge::Safe,
        Some(Confidence::Medium) => ConfidenceBadge::Caution,
        Some(Confidence::Other(_)) => ConfidenceBadge::Risky,
    }
}

fn joined(items: &[String], separator: &str) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.iter().join(separator))
    }
}

pub(crate) fn zone_card(
    entry: &ZoneEntry,
    current_price: f64,
    policy: &RenderPolicy,
) -> ZoneCardView {
    ZoneCardView {
        price: entry.price,
        price_text: format_price(entry.price),
        direction: zone_direction(current_price, entry.price),
        score: entry.score,
        score_text: format_number(entry.score),
        fill_pct: score_fill_pct(entry.score),
        sources: sources_view(&entry.sources, policy.source_layout),
        confirmations: joined(&entry.confirmations, RENDER.confirmation_separator),
        warnings: joined(&entry.warnings, RENDER.warning_separator),
        badge: confidence_badge(entry.confidence.as_ref()),
    }
}

/// Full re-render of a container. An empty list becomes a single placeholder.
pub(crate) fn render_zone_list(
    container: ZoneContainer,
    entries: &[ZoneEntry],
    current_price: f64,
    policy: &RenderPolicy,
) -> ZoneListView {
    if entries.is_empty() {
        return ZoneListView::Placeholder(container.placeholder().to_string());
    }
    ZoneListView::Cards(
        entries
            .iter()
            .map(|entry| zone_card(entry, current_price, policy))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceLayout;
    use crate::models::SourcesView;

    fn entry(price: f64, score: f64) -> ZoneEntry {
        ZoneEntry {
            price,
            score,
            sources: vec!["1h EMA 50".to_string(), "Prev Day Low (PDL)".to_string()],
            confirmations: vec![],
            warnings: vec![],
            confidence: None,
        }
    }

    #[test]
    fn test_zone_direction() {
        assert_eq!(zone_direction(100.0, 95.0), ZoneDirection::Support);
        assert_eq!(zone_direction(100.0, 105.0), ZoneDirection::Resistance);
        // Tie goes to resistance
        assert_eq!(zone_direction(100.0, 100.0), ZoneDirection::Resistance);
    }

    #[test]
    fn test_score_fill_clamp() {
        assert_eq!(score_fill_pct(50.0), 100.0);
        assert_eq!(score_fill_pct(12.5), 50.0);
        assert_eq!(score_fill_pct(25.0), 100.0);
        // No lower clamp
        assert!(score_fill_pct(-5.0) < 0.0);
    }

    #[test]
    fn test_confidence_badges() {
        assert_eq!(confidence_badge(None), ConfidenceBadge::Safe);
        assert_eq!(confidence_badge(Some(&Confidence::High)), ConfidenceBadge::Safe);
        assert_eq!(
            confidence_badge(Some(&Confidence::Medium)),
            ConfidenceBadge::Caution
        );
        assert_eq!(
            confidence_badge(Some(&Confidence::Other("Low".into()))),
            ConfidenceBadge::Risky
        );
    }

    #[test]
    fn test_empty_list_is_single_placeholder() {
        let view = render_zone_list(
            ZoneContainer::Scalper,
            &[],
            100.0,
            &RenderPolicy::default(),
        );
        assert_eq!(view.element_count(), 1);
        assert!(matches!(view, ZoneListView::Placeholder(_)));
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_card_contents() {
        let mut e = entry(95.0, 18.0);
        e.confirmations = vec!["🔥 Volume Spike".into(), "🕯️ HAMMER (Bullish)".into()];
        e.warnings = vec!["Trend against zone".into(), "Low volume".into()];
        e.confidence = Some(Confidence::Medium);

        let card = zone_card(&e, 100.0, &RenderPolicy::default());
        assert_eq!(card.price_text, "$95.0000");
        assert_eq!(card.direction, ZoneDirection::Support);
        assert_eq!(card.score_text, "18");
        assert!((card.fill_pct - 72.0).abs() < 1e-9);
        assert_eq!(
            card.confirmations.as_deref(),
            Some("🔥 Volume Spike 🕯️ HAMMER (Bullish)")
        );
        assert_eq!(
            card.warnings.as_deref(),
            Some("Trend against zone | Low volume")
        );
        assert_eq!(card.badge, ConfidenceBadge::Caution);
        assert!(matches!(card.sources, SourcesView::Grouped(_)));
    }

    #[test]
    fn test_absent_annotations() {
        let card = zone_card(&entry(105.0, 3.0), 100.0, &RenderPolicy::default());
        assert_eq!(card.confirmations, None);
        assert_eq!(card.warnings, None);
        assert_eq!(card.badge, ConfidenceBadge::Safe);
    }

    #[test]
    fn test_flat_policy() {
        let policy = RenderPolicy {
            source_layout: SourceLayout::Flat,
            ..Default::default()
        };
        let card = zone_card(&entry(105.0, 3.0), 100.0, &policy);
        assert_eq!(
            card.sources,
            SourcesView::Flat(vec!["1h EMA 50".into(), "Prev Day Low (PDL)".into()])
        );
    }

    #[test]
    fn test_cards_keep_entry_order() {
        let entries = vec![entry(90.0, 20.0), entry(110.0, 9.0), entry(99.0, 14.0)];
        let view = render_zone_list(
            ZoneContainer::Macro,
            &entries,
            100.0,
            &RenderPolicy::default(),
        );
        let prices: Vec<_> = view.cards().iter().map(|c| c.price).collect();
        assert_eq!(prices, vec![90.0, 110.0, 99.0]);
        assert_eq!(view.element_count(), 3);
    }
}
