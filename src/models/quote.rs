use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point-in-time price/market snapshot for one ticker symbol.
/// Built fresh on every poll and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub rank: Option<u32>,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub last_updated: DateTime<Utc>,
}

/// The full row set of the last successful refresh cycle. Always
/// replaced wholesale, never patched row by row, so the displayed data
/// is self-consistent with a single API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub quotes: Vec<Quote>,
    pub convert: String,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(quotes: Vec<Quote>, convert: impl Into<String>) -> Self {
        Self {
            quotes,
            convert: convert.into(),
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn total_market_cap(&self) -> f64 {
        self.quotes.iter().filter_map(|q| q.market_cap).sum()
    }

    pub fn total_volume_24h(&self) -> f64 {
        self.quotes.iter().filter_map(|q| q.volume_24h).sum()
    }

    /// Market-cap share of one symbol against the whole snapshot, in
    /// percent. None when the symbol is absent or caps are unknown.
    pub fn dominance(&self, symbol: &str) -> Option<f64> {
        let total = self.total_market_cap();
        if total <= 0.0 {
            return None;
        }
        self.quotes
            .iter()
            .find(|q| q.symbol == symbol)
            .and_then(|q| q.market_cap)
            .map(|cap| cap / total * 100.0)
    }
}
