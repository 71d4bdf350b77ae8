use eframe::egui::{RichText, ScrollArea, Ui};

use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

pub(crate) fn render_help(ui: &mut Ui) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_max_width(720.0);
            for (title, body) in &UI_TEXT.help_sections {
                ui.label_subheader(title.as_str());
                ui.label(RichText::new(body).color(UI_CONFIG.colors.neutral));
                ui.add_space(10.0);
            }
        });
}
