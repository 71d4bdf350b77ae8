use {
    crate::{
        models::{ConfidenceBadge, Tone},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{
        Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
        WidgetInfo, WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait ToneColor {
    fn color(&self) -> Color32;
}

impl ToneColor for Tone {
    fn color(&self) -> Color32 {
        match self {
            Self::Neutral => UI_CONFIG.colors.neutral,
            Self::Positive => UI_CONFIG.colors.positive,
            Self::Negative => UI_CONFIG.colors.negative,
            Self::Alert => UI_CONFIG.colors.alert,
        }
    }
}

impl ToneColor for ConfidenceBadge {
    fn color(&self) -> Color32 {
        match self {
            Self::Safe => UI_CONFIG.colors.badge_safe,
            Self::Caution => UI_CONFIG.colors.badge_caution,
            Self::Risky => UI_CONFIG.colors.badge_risky,
        }
    }
}

pub(crate) fn badge_text(badge: ConfidenceBadge) -> &'static str {
    match badge {
        ConfidenceBadge::Safe => &UI_TEXT.badge_safe,
        ConfidenceBadge::Caution => &UI_TEXT.badge_caution,
        ConfidenceBadge::Risky => &UI_TEXT.badge_risky,
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, gray bg on hover, blue bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn badge(&mut self, text: &str, fill: Color32) -> Response;
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(8.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (visuals.selection.bg_fill, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, Color32::YELLOW)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn badge(&mut self, text: &str, fill: Color32) -> Response {
        self.label(
            RichText::new(format!(" {} ", text))
                .small()
                .strong()
                .color(Color32::WHITE)
                .background_color(fill),
        )
    }
}
