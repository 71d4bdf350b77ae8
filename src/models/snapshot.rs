use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::models::ZoneContainer;

/// Fail-fast errors for payloads the analysis engine should never produce.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Malformed JSON or a missing required field
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid current price: {0} (must be a positive finite number)")]
    InvalidPrice(f64),

    #[error("Sentiment score is not a finite number: {0}")]
    NonFiniteScore(f64),

    #[error("Invalid {container} entry #{index}: {reason}")]
    InvalidEntry {
        container: ZoneContainer,
        index: usize,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub description: String,
    pub score: f64,
}

/// Confidence label attached to a zone. Anything the engine sends besides
/// "High" or "Medium" is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Confidence {
    High,
    Medium,
    Other(String),
}

impl From<String> for Confidence {
    fn from(value: String) -> Self {
        match value.as_str() {
            "High" => Confidence::High,
            "Medium" => Confidence::Medium,
            _ => Confidence::Other(value),
        }
    }
}

impl From<Confidence> for String {
    fn from(value: Confidence) -> Self {
        match value {
            Confidence::High => "High".to_string(),
            Confidence::Medium => "Medium".to_string(),
            Confidence::Other(s) => s,
        }
    }
}

/// A candidate support/resistance level with its confluence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub price: f64,
    pub score: f64,
    pub sources: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub confirmations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub confidence: Option<Confidence>,
}

/// One payload from the analysis engine. Every render fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current_price: f64,
    pub sentiment: Sentiment,
    pub divergence_status: String,
    pub market_regime: String,
    pub volatility: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub market_warnings: Vec<String>,
    pub status: String,
    pub potential_entries: Vec<ZoneEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scalper_entries: Vec<ZoneEntry>,
}

impl Snapshot {
    /// Parse and validate a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn entries(&self, container: ZoneContainer) -> &[ZoneEntry] {
        match container {
            ZoneContainer::Macro => &self.potential_entries,
            ZoneContainer::Scalper => &self.scalper_entries,
        }
    }

    /// Numeric preconditions serde cannot express.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if !self.current_price.is_finite() || self.current_price <= 0.0 {
            return Err(SnapshotError::InvalidPrice(self.current_price));
        }
        if !self.sentiment.score.is_finite() {
            return Err(SnapshotError::NonFiniteScore(self.sentiment.score));
        }
        for container in [ZoneContainer::Macro, ZoneContainer::Scalper] {
            for (index, entry) in self.entries(container).iter().enumerate() {
                let reason = if !entry.price.is_finite() {
                    "price is not a finite number"
                } else if !entry.score.is_finite() {
                    "score is not a finite number"
                } else {
                    continue;
                };
                return Err(SnapshotError::InvalidEntry {
                    container,
                    index,
                    reason,
                });
            }
        }
        Ok(())
    }
}

// The engine sends `null` as often as it omits the key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
