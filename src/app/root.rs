use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, ComboBox, Context, FontId, RichText, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::sync::mpsc::{self, Receiver},
    strum::IntoEnumIterator,
};

use crate::{
    Cli,
    app::{FeedState, FeedStatus, PriceFlash},
    config::{FEED, RenderPolicy, SourceLayout},
    dashboard::{DashboardRenderer, TabController},
    data::{FeedEvent, spawn_feed},
    models::{Tab, ZoneContainer},
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt, render_help, render_metric_cards, render_zone_list,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) policy: RenderPolicy, // persists across sessions.
    pub(crate) active_tab: Tab,
    #[serde(skip)]
    pub(crate) renderer: DashboardRenderer,
    #[serde(skip)]
    pub(crate) tabs: TabController,
    #[serde(skip)]
    pub(crate) feed_rx: Option<Receiver<FeedEvent>>,
    #[serde(skip)]
    pub(crate) feed: FeedState,
    #[serde(skip)]
    pub(crate) flash: Option<PriceFlash>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            policy: RenderPolicy::default(),
            active_tab: Tab::default(),
            renderer: DashboardRenderer::default(),
            tabs: TabController::default(),
            feed_rx: None,
            feed: FeedState::default(),
            flash: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        #[cfg(debug_assertions)]
        if DF.log_persistence {
            log::info!(
                "Restored UI state: tab {} | policy {:?}",
                app.active_tab,
                app.policy
            );
        }

        args.apply_to(&mut app.policy);
        app.renderer = DashboardRenderer::new(app.policy);
        app.tabs = TabController::new(app.active_tab);

        let (feed_tx, feed_rx) = mpsc::channel();
        match spawn_feed(args.feed_source(), feed_tx) {
            Ok(_) => app.feed_rx = Some(feed_rx),
            Err(e) => {
                log::error!("{:#}", e);
                app.feed.status = FeedStatus::Closed;
            }
        }

        app
    }

    /// Drain everything the feed has delivered since the last frame, in order.
    pub(crate) fn drain_feed(&mut self) {
        let Some(rx) = &self.feed_rx else {
            return;
        };
        let events: Vec<FeedEvent> = rx.try_iter().collect();
        for event in events {
            self.apply_feed_event(event);
        }
    }

    pub(crate) fn apply_feed_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Snapshot(snapshot) => match self.renderer.render(&snapshot) {
                Ok(()) => {
                    self.feed.status = FeedStatus::Live;
                    self.feed.snapshots += 1;
                    self.feed.last_rejection = None;
                    self.flash = PriceFlash::new(self.renderer.view().price.movement);
                }
                Err(e) => self.feed.last_rejection = Some(e.to_string()),
            },
            FeedEvent::Rejected(reason) => self.feed.last_rejection = Some(reason),
            FeedEvent::Closed => {
                log::info!("Snapshot feed closed after {} snapshots", self.feed.snapshots);
                self.feed.status = FeedStatus::Closed;
                self.feed_rx = None;
            }
        }
    }

    pub(crate) fn set_policy(&mut self, policy: RenderPolicy) {
        self.policy = policy;
        self.renderer.set_policy(policy);
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading),
                    );
                    ui.add_space(20.0);

                    for tab in Tab::iter() {
                        if ui
                            .interactive_label(
                                tab.title(),
                                self.tabs.is_button_active(tab),
                                UI_CONFIG.colors.label,
                                FontId::proportional(14.0),
                            )
                            .clicked()
                        {
                            self.tabs.show_tab(tab.as_ref());
                        }
                    }

                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| self.render_policy_controls(ui),
                    );
                });
            });
    }

    fn render_policy_controls(&mut self, ui: &mut eframe::egui::Ui) {
        let mut policy = self.policy;

        ComboBox::from_id_salt("source_layout")
            .selected_text(policy.source_layout.to_string())
            .show_ui(ui, |ui| {
                for layout in SourceLayout::iter() {
                    ui.selectable_value(&mut policy.source_layout, layout, layout.to_string());
                }
            });
        ui.label_subdued(UI_TEXT.label_sources.as_str());
        ui.checkbox(&mut policy.regime_coloring, UI_TEXT.label_regime_colors.as_str());

        // Applies from the next snapshot; the surface is never re-rendered locally
        if policy != self.policy {
            self.set_policy(policy);
        }
    }

    fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&self.renderer.view().status).small());
                    ui.separator();
                    ui.label_subdued(format!(
                        "{} | {} {}",
                        self.feed.status.label(),
                        self.feed.snapshots,
                        UI_TEXT.label_snapshots
                    ));
                    if let Some(reason) = &self.feed.last_rejection {
                        ui.separator();
                        ui.label(
                            RichText::new(format!("{} {}", UI_TEXT.feed_rejected, reason))
                                .small()
                                .color(UI_CONFIG.colors.alert),
                        );
                    }
                });
            });
    }

    fn render_central_panel(&self, ctx: &Context) {
        let view = self.renderer.view();
        let flash = self.flash.map(|f| f.strength()).unwrap_or(0.0);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match self.tabs.active() {
                Some(Tab::Dashboard) => {
                    render_metric_cards(ui, view, flash);
                    ui.add_space(12.0);
                    render_zone_list(ui, ZoneContainer::Macro, view.zones(ZoneContainer::Macro));
                }
                Some(Tab::Scalper) => {
                    render_zone_list(
                        ui,
                        ZoneContainer::Scalper,
                        view.zones(ZoneContainer::Scalper),
                    );
                }
                Some(Tab::Help) => render_help(ui),
                None => {}
            });
    }

    fn schedule_repaint(&mut self, ctx: &Context) {
        match self.flash {
            Some(flash) if flash.strength() > 0.0 => ctx.request_repaint(),
            Some(_) => {
                self.flash = None;
                ctx.request_repaint_after(FEED.idle_repaint);
            }
            None => ctx.request_repaint_after(FEED.idle_repaint),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.drain_feed();
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.schedule_repaint(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.active_tab = self.tabs.active().unwrap_or_default();
        #[cfg(debug_assertions)]
        if DF.log_persistence {
            log::info!(
                "💾 SAVE [App]: tab {} | policy {:?}",
                self.active_tab,
                self.policy
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_event;
    use crate::models::PriceMove;
    use serde_json::json;

    fn payload(price: f64) -> String {
        json!({
            "current_price": price,
            "sentiment": { "description": "Bearish", "score": -2 },
            "divergence_status": "Bearish on 5m",
            "market_regime": "TRENDING (31.4)",
            "volatility": "Volatility: 0.80%",
            "status": "Last updated: 12:00:00",
            "potential_entries": [
                { "price": price * 0.98, "score": 12, "sources": ["1h EMA 99"] }
            ]
        })
        .to_string()
    }

    #[test]
    fn test_snapshot_event_renders() {
        let mut app = App::default();
        app.apply_feed_event(parse_event(&payload(50.0)));

        assert_eq!(app.feed.status, FeedStatus::Live);
        assert_eq!(app.feed.snapshots, 1);
        assert_eq!(app.renderer.view().price.text, "$50.0000");
        assert_eq!(app.renderer.view().price.movement, PriceMove::Up);
        assert!(app.flash.is_some());

        // Same price again: no flash
        app.apply_feed_event(parse_event(&payload(50.0)));
        assert!(app.flash.is_none());
    }

    #[test]
    fn test_rejected_event_keeps_surface() {
        let mut app = App::default();
        app.apply_feed_event(parse_event(&payload(50.0)));
        let before = app.renderer.view().clone();

        app.apply_feed_event(parse_event("{\"current_price\": 1.0}"));
        assert_eq!(app.renderer.view(), &before);
        assert_eq!(app.feed.snapshots, 1);
        assert!(app.feed.last_rejection.is_some());

        app.apply_feed_event(parse_event(&payload(51.0)));
        assert!(app.feed.last_rejection.is_none());
    }

    #[test]
    fn test_closed_event() {
        let mut app = App::default();
        let (_tx, rx) = mpsc::channel();
        app.feed_rx = Some(rx);
        app.apply_feed_event(FeedEvent::Closed);
        assert_eq!(app.feed.status, FeedStatus::Closed);
        assert!(app.feed_rx.is_none());
    }

    #[test]
    fn test_drain_feed_in_order() {
        let mut app = App::default();
        let (tx, rx) = mpsc::channel();
        app.feed_rx = Some(rx);
        tx.send(parse_event(&payload(10.0))).unwrap();
        tx.send(parse_event(&payload(9.0))).unwrap();
        app.drain_feed();

        assert_eq!(app.feed.snapshots, 2);
        assert_eq!(app.renderer.view().price.text, "$9.0000");
        assert_eq!(app.renderer.view().price.movement, PriceMove::Down);
    }

    #[test]
    fn test_policy_persists_through_serde() {
        let mut app = App::default();
        app.set_policy(RenderPolicy {
            regime_coloring: true,
            source_layout: SourceLayout::Flat,
        });
        app.tabs.show_tab("help");
        app.active_tab = app.tabs.active().unwrap_or_default();

        let json = serde_json::to_string(&app).unwrap();
        let restored: App = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.policy, app.policy);
        assert_eq!(restored.active_tab, Tab::Help);
    }
}
