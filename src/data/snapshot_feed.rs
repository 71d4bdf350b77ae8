//! Delivers snapshots from outside the process to the UI thread.
//!
//! A background thread reads JSON payloads and sends them over an mpsc
//! channel; the app drains the channel once per frame, so renders never
//! overlap.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::config::FEED;
use crate::models::Snapshot;

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// A file the engine rewrites with the latest snapshot.
    File(PathBuf),
    /// One JSON snapshot per line on stdin.
    Stdin,
}

#[derive(Debug)]
pub enum FeedEvent {
    Snapshot(Box<Snapshot>),
    /// Payload failed to parse or validate. The dashboard keeps its last good render.
    Rejected(String),
    /// The source has nothing more to give (stdin EOF).
    Closed,
}

/// Parse one payload into the event the UI receives.
pub fn parse_event(payload: &str) -> FeedEvent {
    match Snapshot::from_json(payload) {
        Ok(snapshot) => FeedEvent::Snapshot(Box::new(snapshot)),
        Err(e) => FeedEvent::Rejected(e.to_string()),
    }
}

pub fn spawn_feed(source: FeedSource, tx: Sender<FeedEvent>) -> Result<JoinHandle<()>> {
    let name = match &source {
        FeedSource::File(path) => format!("feed:{}", path.display()),
        FeedSource::Stdin => "feed:stdin".to_string(),
    };
    thread::Builder::new()
        .name(name)
        .spawn(move || {
            let result = match source {
                FeedSource::File(path) => poll_file(&path, &tx),
                FeedSource::Stdin => read_stdin(&tx),
            };
            if let Err(e) = result {
                log::error!("Snapshot feed stopped: {:#}", e);
            }
            let _ = tx.send(FeedEvent::Closed);
        })
        .context("Failed to spawn snapshot feed thread")
}

/// Returns `Ok(false)` once the receiving side has gone away.
fn deliver(tx: &Sender<FeedEvent>, payload: &str) -> bool {
    let event = parse_event(payload);

    #[cfg(debug_assertions)]
    if DF.log_feed {
        match &event {
            FeedEvent::Snapshot(s) => log::info!("Snapshot received @ {}", s.current_price),
            FeedEvent::Rejected(reason) => log::warn!("Snapshot rejected: {}", reason),
            FeedEvent::Closed => {}
        }
    }

    tx.send(event).is_ok()
}

fn poll_file(path: &Path, tx: &Sender<FeedEvent>) -> Result<()> {
    let mut last_modified: Option<SystemTime> = None;
    loop {
        match read_if_changed(path, last_modified) {
            Ok(Some((modified, payload))) => {
                last_modified = Some(modified);
                if !deliver(tx, &payload) {
                    return Ok(());
                }
            }
            Ok(None) => {}
            // The engine may not have written the file yet
            Err(e) => log::warn!("{:#}", e),
        }
        thread::sleep(FEED.poll_interval);
    }
}

fn read_if_changed(
    path: &Path,
    last_modified: Option<SystemTime>,
) -> Result<Option<(SystemTime, String)>> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .with_context(|| format!("Cannot stat snapshot file {}", path.display()))?;
    if last_modified == Some(modified) {
        return Ok(None);
    }
    let payload = fs::read_to_string(path)
        .with_context(|| format!("Cannot read snapshot file {}", path.display()))?;
    Ok(Some((modified, payload)))
}

fn read_stdin(tx: &Sender<FeedEvent>) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read snapshot from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if !deliver(tx, &line) {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::mpsc;

    fn payload(price: f64) -> String {
        json!({
            "current_price": price,
            "sentiment": { "description": "Neutral", "score": 0 },
            "divergence_status": "None",
            "market_regime": "RANGING (20.0)",
            "volatility": "Volatility: 0.10%",
            "status": "ok",
            "potential_entries": []
        })
        .to_string()
    }

    #[test]
    fn test_parse_event() {
        assert!(matches!(parse_event(&payload(10.0)), FeedEvent::Snapshot(s) if s.current_price == 10.0));
        assert!(matches!(parse_event("{not json"), FeedEvent::Rejected(_)));
        assert!(matches!(parse_event(&payload(-1.0)), FeedEvent::Rejected(r) if r.contains("Invalid current price")));
    }

    #[test]
    fn test_deliver_reports_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        assert!(deliver(&tx, &payload(1.0)));
        assert!(matches!(rx.try_recv(), Ok(FeedEvent::Snapshot(_))));
        drop(rx);
        assert!(!deliver(&tx, &payload(1.0)));
    }

    #[test]
    fn test_read_if_changed() {
        let path = std::env::temp_dir().join(format!(
            "trade_helper_feed_test_{}.json",
            std::process::id()
        ));
        fs::write(&path, payload(3.0)).unwrap();

        let (modified, body) = read_if_changed(&path, None).unwrap().unwrap();
        assert_eq!(body, payload(3.0));
        assert!(read_if_changed(&path, Some(modified)).unwrap().is_none());

        fs::remove_file(&path).unwrap();
        assert!(read_if_changed(&path, Some(modified)).is_err());
    }
}
