//! Tab panel/button visibility.

use std::collections::HashMap;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::models::Tab;

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TabState {
    panel_active: bool,
    button_active: bool,
}

/// Tracks which tab panel and tab button are active.
#[derive(Debug, Clone)]
pub struct TabController {
    states: HashMap<Tab, TabState>,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}

impl TabController {
    pub fn new(initial: Tab) -> Self {
        let mut controller = Self {
            states: Tab::iter().map(|t| (t, TabState::default())).collect(),
        };
        controller.activate(initial);
        controller
    }

    /// Deactivate every panel and button, then activate the pair named
    /// `tab_name`. An unknown name changes nothing and returns `false`.
    pub fn show_tab(&mut self, tab_name: &str) -> bool {
        match Tab::from_str(tab_name) {
            Ok(tab) => {
                self.activate(tab);
                true
            }
            Err(_) => {
                log::debug!("Ignoring show_tab for unknown tab {:?}", tab_name);
                false
            }
        }
    }

    fn activate(&mut self, tab: Tab) {
        for state in self.states.values_mut() {
            *state = TabState::default();
        }
        self.states.insert(
            tab,
            TabState {
                panel_active: true,
                button_active: true,
            },
        );

        #[cfg(debug_assertions)]
        if DF.log_tabs {
            log::info!("Active tab: {}", tab);
        }
    }

    pub fn is_panel_active(&self, tab: Tab) -> bool {
        self.states.get(&tab).is_some_and(|s| s.panel_active)
    }

    pub fn is_button_active(&self, tab: Tab) -> bool {
        self.states.get(&tab).is_some_and(|s| s.button_active)
    }

    /// The tab whose panel is showing.
    pub fn active(&self) -> Option<Tab> {
        Tab::iter().find(|t| self.is_panel_active(*t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_dashboard() {
        let tabs = TabController::default();
        assert_eq!(tabs.active(), Some(Tab::Dashboard));
        assert!(tabs.is_button_active(Tab::Dashboard));
        assert!(!tabs.is_panel_active(Tab::Help));
    }

    #[test]
    fn test_show_tab_activates_only_matching_pair() {
        let mut tabs = TabController::default();
        assert!(tabs.show_tab("scalper"));

        for tab in Tab::iter() {
            let expected = tab == Tab::Scalper;
            assert_eq!(tabs.is_panel_active(tab), expected, "panel {}", tab);
            assert_eq!(tabs.is_button_active(tab), expected, "button {}", tab);
        }
    }

    #[test]
    fn test_unknown_tab_is_noop() {
        let mut tabs = TabController::new(Tab::Help);
        assert!(!tabs.show_tab("zones"));
        assert!(!tabs.show_tab("Scalper"));
        assert_eq!(tabs.active(), Some(Tab::Help));
        assert!(tabs.is_button_active(Tab::Help));
    }

    #[test]
    fn test_tab_names_round_trip() {
        for tab in Tab::iter() {
            let mut tabs = TabController::default();
            assert!(tabs.show_tab(tab.as_ref()));
            assert_eq!(tabs.active(), Some(tab));
        }
    }
}
