//! The row of metric cards at the top of the Macro View.

use eframe::egui::{Color32, RichText, Ui};

use crate::models::{DashboardView, TextCard, Tone};
use crate::ui::styles::{ToneColor, UiStyleExt, apply_opacity};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// `flash` is the remaining strength (1.0 -> 0.0) of the price card's highlight.
pub(crate) fn render_metric_cards(ui: &mut Ui, view: &DashboardView, flash: f32) {
    ui.columns(4, |cols| {
        let price_tone = view.price.movement.tone();
        let fill = if flash > 0.0 && price_tone != Tone::Neutral {
            UI_CONFIG
                .colors
                .card
                .lerp_to_gamma(apply_opacity(price_tone.color(), 0.6), flash * 0.5)
        } else {
            UI_CONFIG.colors.card
        };
        metric_card(
            &mut cols[0],
            &UI_TEXT.card_price,
            &view.price.text,
            None,
            price_tone.color(),
            fill,
        );

        text_card(&mut cols[1], &UI_TEXT.card_sentiment, &view.sentiment, None);
        text_card(&mut cols[2], &UI_TEXT.card_divergence, &view.divergence, None);
        // Volatility rides along under the regime
        text_card(
            &mut cols[3],
            &UI_TEXT.card_regime,
            &view.regime,
            Some(&view.volatility),
        );
    });
}

fn text_card(ui: &mut Ui, title: &str, card: &TextCard, extra: Option<&str>) {
    let subtitle = match (card.subtitle.as_deref(), extra) {
        (Some(s), Some(e)) => Some(format!("{} {}", s, e)),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    };
    metric_card(
        ui,
        title,
        &card.text,
        subtitle.as_deref(),
        card.tones.effective().color(),
        UI_CONFIG.colors.card,
    );
}

fn metric_card(
    ui: &mut Ui,
    title: &str,
    value: &str,
    subtitle: Option<&str>,
    color: Color32,
    fill: Color32,
) {
    UI_CONFIG.card_frame(fill).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label_subdued(title);
        ui.label(
            RichText::new(value)
                .size(UI_CONFIG.metric_value_size)
                .strong()
                .color(color),
        );
        if let Some(subtitle) = subtitle {
            ui.label_subdued(subtitle);
        }
    });
}
