use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,

    // --- Semantic text colors ---
    pub positive: Color32,
    pub negative: Color32,
    pub neutral: Color32,
    pub alert: Color32,
    pub subdued: Color32,
    pub confirmation: Color32,

    // --- Confidence badges ---
    pub badge_safe: Color32,
    pub badge_caution: Color32,
    pub badge_risky: Color32,

    pub score_bar_track: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Width of the colored stripe on the left edge of a zone card
    pub zone_stripe_width: f32,
    pub score_bar_height: f32,
    pub metric_value_size: f32,
    /// Score bar gradient, low score to high score
    pub score_gradient: &'static [&'static str],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(26, 26, 29),
        side_panel: Color32::from_rgb(20, 20, 23),
        card: Color32::from_rgb(37, 37, 42),
        card_border: Color32::from_rgb(55, 55, 62),

        positive: Color32::from_rgb(46, 204, 113),
        negative: Color32::from_rgb(231, 76, 60),
        neutral: Color32::from_rgb(230, 230, 230),
        alert: Color32::from_rgb(255, 165, 0),
        subdued: Color32::from_gray(140),
        confirmation: Color32::from_rgb(100, 200, 255),

        badge_safe: Color32::from_rgb(39, 174, 96),
        badge_caution: Color32::from_rgb(243, 156, 18),
        badge_risky: Color32::from_rgb(192, 57, 43),

        score_bar_track: Color32::from_rgb(50, 50, 56),
    },
    zone_stripe_width: 4.0,
    score_bar_height: 6.0,
    metric_value_size: 22.0,
    score_gradient: &["#4b0082", "#ffb703", "#ff8c00", "#ff4500"],
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for metric and zone cards
    pub fn card_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin {
                left: 12,
                right: 10,
                top: 8,
                bottom: 8,
            },
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
