use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use trade_helper::config::{RenderPolicy, SourceLayout};
use trade_helper::models::{
    DashboardView, PriceMove, Snapshot, TextCard, Tone, ZoneCardView, ZoneContainer, ZoneListView,
};
use trade_helper::ui::UI_TEXT;
use trade_helper::DashboardRenderer;

/// Render one snapshot the way the dashboard would, as plain text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot JSON file. Reads stdin when omitted or `-`
    path: Option<PathBuf>,

    /// List zone sources as sent instead of grouping them by category
    #[arg(long, default_value_t = false)]
    flat_sources: bool,

    /// Color the regime label green on RANGING and red on TRENDING
    #[arg(long, default_value_t = false)]
    regime_colors: bool,

    /// Price the up/down flash compares against
    #[arg(long, default_value_t = 0.0)]
    previous_price: f64,
}

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Fill")]
    fill: String,
    #[tabled(rename = "Sources")]
    sources: String,
    #[tabled(rename = "Confirmations")]
    confirmations: String,
    #[tabled(rename = "Warnings")]
    warnings: String,
    #[tabled(rename = "Badge")]
    badge: String,
}

impl From<&ZoneCardView> for ZoneRow {
    fn from(card: &ZoneCardView) -> Self {
        Self {
            price: card.price_text.clone(),
            level: format!("{} ({})", card.direction.label(), card.direction.side()),
            score: card.score_text.clone(),
            fill: format!("{:.0}%", card.fill_pct),
            sources: card.sources.lines().join("\n"),
            confirmations: card.confirmations.clone().unwrap_or_default(),
            warnings: card.warnings.clone().unwrap_or_default(),
            badge: card.badge.to_string().to_uppercase(),
        }
    }
}

fn read_payload(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read snapshot file {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snapshot from stdin")?;
            Ok(buf)
        }
    }
}

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "",
        Tone::Positive => " [+]",
        Tone::Negative => " [-]",
        Tone::Alert => " [!]",
    }
}

fn text_line(title: &str, card: &TextCard) -> String {
    let subtitle = card
        .subtitle
        .as_deref()
        .map(|s| format!(" {}", s))
        .unwrap_or_default();
    format!(
        "{:<24}{}{}{}",
        title,
        card.text,
        subtitle,
        tone_marker(card.tones.effective())
    )
}

fn print_metrics(view: &DashboardView) {
    let flash = match view.price.movement {
        PriceMove::Up => " [up]",
        PriceMove::Down => " [down]",
        PriceMove::Flat => "",
    };
    println!("{:<24}{}{}", UI_TEXT.card_price, view.price.text, flash);
    println!("{}", text_line(&UI_TEXT.card_sentiment, &view.sentiment));
    println!("{}", text_line(&UI_TEXT.card_divergence, &view.divergence));
    println!("{}", text_line(&UI_TEXT.card_regime, &view.regime));
    println!("{:<24}{}", "", view.volatility);
}

fn print_zones(container: ZoneContainer, list: &ZoneListView) {
    println!("\n{}", container.heading());
    match list {
        ZoneListView::Placeholder(text) => println!("{}", text),
        ZoneListView::Cards(cards) => {
            let rows: Vec<ZoneRow> = cards.iter().map(ZoneRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let payload = read_payload(args.path.as_ref())?;
    let snapshot = Snapshot::from_json(&payload).context("Snapshot rejected")?;

    let policy = RenderPolicy {
        regime_coloring: args.regime_colors,
        source_layout: if args.flat_sources {
            SourceLayout::Flat
        } else {
            SourceLayout::Grouped
        },
    };
    let mut renderer = DashboardRenderer::new(policy).with_previous_price(args.previous_price);
    renderer.render(&snapshot)?;

    let view = renderer.view();
    print_metrics(view);
    for container in ZoneContainer::iter() {
        print_zones(container, view.zones(container));
    }
    println!("\n{}", view.status);

    Ok(())
}
