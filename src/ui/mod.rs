mod help;
mod metric_cards;
mod styles;
mod ui_config;
mod ui_text;
mod zone_cards;

pub(crate) use help::render_help;
pub(crate) use metric_cards::render_metric_cards;
pub(crate) use styles::UiStyleExt;
pub(crate) use zone_cards::render_zone_list;

pub use ui_config::{UI_CONFIG, UI_TEXT};
