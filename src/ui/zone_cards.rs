//! Zone card lists for the Macro and Scalper views.

use std::sync::LazyLock;

use colorgrad::Gradient;
use eframe::egui::{Align, Color32, Layout, Rect, RichText, ScrollArea, Sense, Ui, vec2};

use crate::models::{SourcesView, ZoneCardView, ZoneContainer, ZoneListView};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{ToneColor, UiStyleExt, badge_text};
use crate::ui::ui_text::ICON_WARNING;

static SCORE_GRADIENT: LazyLock<Option<colorgrad::LinearGradient>> = LazyLock::new(|| {
    colorgrad::GradientBuilder::new()
        .html_colors(UI_CONFIG.score_gradient)
        .build::<colorgrad::LinearGradient>()
        .map_err(|e| log::error!("Failed to build score gradient: {}", e))
        .ok()
});

fn score_color(fill_pct: f64) -> Color32 {
    let t = (fill_pct / 100.0).clamp(0.0, 1.0) as f32;
    match SCORE_GRADIENT.as_ref() {
        Some(gradient) => {
            let rgba = gradient.at(t).to_rgba8();
            Color32::from_rgb(rgba[0], rgba[1], rgba[2])
        }
        None => UI_CONFIG.colors.alert,
    }
}

pub(crate) fn render_zone_list(ui: &mut Ui, container: ZoneContainer, list: &ZoneListView) {
    ui.heading(container.heading());
    ui.add_space(6.0);

    match list {
        ZoneListView::Placeholder(text) => {
            ui.label(RichText::new(text).italics().color(UI_CONFIG.colors.subdued));
        }
        ZoneListView::Cards(cards) => {
            ScrollArea::vertical()
                .id_salt(container.to_string())
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for card in cards {
                        zone_card(ui, card);
                        ui.add_space(8.0);
                    }
                });
        }
    }
}

fn zone_card(ui: &mut Ui, card: &ZoneCardView) {
    let direction_color = card.direction.tone().color();

    let response = UI_CONFIG.card_frame(UI_CONFIG.colors.card).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        // Header: level on the left, score and badge on the right
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&card.price_text)
                        .size(18.0)
                        .strong()
                        .color(direction_color),
                );
                ui.label_subdued(format!("{} · {}", card.direction.label(), card.direction.side()));
            });
            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                ui.badge(badge_text(card.badge), card.badge.color());
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&card.score_text).size(18.0).strong());
                    ui.label_subdued(UI_TEXT.label_confluence_score.as_str());
                });
            });
        });

        score_bar(ui, card.fill_pct);
        ui.add_space(4.0);

        match &card.sources {
            SourcesView::Flat(tags) => {
                ui.horizontal_wrapped(|ui| {
                    for tag in tags {
                        ui.label(RichText::new(tag).small().background_color(UI_CONFIG.colors.card_border));
                    }
                });
            }
            SourcesView::Grouped(groups) => {
                for group in groups {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        ui.label(RichText::new(format!("{}:", group.bucket)).small().strong());
                        ui.label(RichText::new(group.items.join(", ")).small());
                    });
                }
            }
        }

        if let Some(confirmations) = &card.confirmations {
            ui.add_space(2.0);
            ui.label(
                RichText::new(confirmations)
                    .small()
                    .color(UI_CONFIG.colors.confirmation),
            );
        }
        if let Some(warnings) = &card.warnings {
            ui.add_space(2.0);
            ui.label(
                RichText::new(format!("{} {}", ICON_WARNING, warnings))
                    .small()
                    .color(UI_CONFIG.colors.alert),
            );
        }
    });

    // Direction stripe down the left edge
    let rect = response.response.rect;
    let stripe = Rect::from_min_size(rect.min, vec2(UI_CONFIG.zone_stripe_width, rect.height()));
    ui.painter().rect_filled(stripe, 2.0, direction_color);
}

fn score_bar(ui: &mut Ui, fill_pct: f64) {
    let (rect, _) = ui.allocate_exact_size(
        vec2(ui.available_width(), UI_CONFIG.score_bar_height),
        Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, UI_CONFIG.colors.score_bar_track);

    // Negative scores draw nothing
    let frac = (fill_pct / 100.0).clamp(0.0, 1.0) as f32;
    if frac > 0.0 {
        let filled = Rect::from_min_size(rect.min, vec2(rect.width() * frac, rect.height()));
        painter.rect_filled(filled, 2.0, score_color(fill_pct));
    }
}
