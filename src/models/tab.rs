use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::ui::UI_TEXT;

/// Dashboard tabs. The lowercase name is the identifier `show_tab` accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Scalper,
    Help,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => &UI_TEXT.tab_macro,
            Tab::Scalper => &UI_TEXT.tab_scalper,
            Tab::Help => &UI_TEXT.tab_help,
        }
    }
}
