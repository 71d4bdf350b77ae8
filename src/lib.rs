#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for render_snapshot.rs)
pub use app::App;
pub use config::{PERSISTENCE, RenderPolicy, SourceLayout};
pub use dashboard::{DashboardRenderer, TabController};
pub use data::{FeedEvent, FeedSource};
pub use models::{DashboardView, Snapshot, SnapshotError, Tab};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file the analysis engine rewrites. Reads JSON lines from stdin when omitted
    #[arg(long)]
    pub feed: Option<PathBuf>,

    /// Color the regime label green on RANGING and red on TRENDING
    #[arg(long, default_value_t = false)]
    pub regime_colors: bool,

    /// List zone sources as sent instead of grouping them by category
    #[arg(long, default_value_t = false)]
    pub flat_sources: bool,
}

impl Cli {
    pub fn feed_source(&self) -> FeedSource {
        match &self.feed {
            Some(path) => FeedSource::File(path.clone()),
            None => FeedSource::Stdin,
        }
    }

    /// Flags only switch things on; an absent flag keeps the persisted choice.
    pub fn apply_to(&self, policy: &mut RenderPolicy) {
        if self.regime_colors {
            policy.regime_coloring = true;
        }
        if self.flat_sources {
            policy.source_layout = SourceLayout::Flat;
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_policy() {
        let args = Cli::parse_from(["trade-helper", "--flat-sources", "--feed", "snap.json"]);
        assert_eq!(args.feed_source(), FeedSource::File(PathBuf::from("snap.json")));

        let mut policy = RenderPolicy::default();
        args.apply_to(&mut policy);
        assert_eq!(policy.source_layout, SourceLayout::Flat);
        assert!(!policy.regime_coloring);
    }

    #[test]
    fn test_cli_defaults_keep_persisted_policy() {
        let args = Cli::parse_from(["trade-helper"]);
        assert_eq!(args.feed_source(), FeedSource::Stdin);

        let mut policy = RenderPolicy {
            regime_coloring: true,
            source_layout: SourceLayout::Flat,
        };
        args.apply_to(&mut policy);
        assert!(policy.regime_coloring);
        assert_eq!(policy.source_layout, SourceLayout::Flat);
    }
}
