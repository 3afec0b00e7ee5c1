use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use cmc_terminal::api::QuoteProvider;
use cmc_terminal::error::{Error, Result};
use cmc_terminal::models::Quote;

// Helper to create test quotes without touching the network
pub fn create_test_quote(symbol: &str, price: f64, change_24h: f64) -> Quote {
    Quote {
        rank: None,
        name: symbol.to_string(),
        symbol: symbol.to_string(),
        price,
        percent_change_1h: None,
        percent_change_24h: Some(change_24h),
        percent_change_7d: None,
        market_cap: Some(price * 1e9),
        volume_24h: Some(price * 1e7),
        last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

/// Scripted provider: answers each fetch with the next queued result,
/// regardless of mode.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<Vec<Quote>>>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<Vec<Quote>>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    fn next(&self) -> Result<Vec<Quote>> {
        self.script
            .lock()
            .expect("script mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(Error::InternalError("script exhausted".to_string())))
    }
}

#[async_trait]
impl QuoteProvider for ScriptedProvider {
    async fn latest_quotes(&self, _symbols: &[String], _convert: &str) -> Result<Vec<Quote>> {
        self.next()
    }

    async fn latest_listings(&self, _limit: u32, _convert: &str) -> Result<Vec<Quote>> {
        self.next()
    }
}
