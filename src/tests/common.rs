use chrono::{TimeZone, Utc};

use crate::config::Config;
use crate::models::Quote;

// Helper to create a default test config
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.api.api_key = "0000-1111-2222-3333-4444".to_string();
    config
}

// Minimal quote for tests that only care about price and 24h change
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

// Fully populated quote, for display-shaping tests
pub fn create_ranked_quote(symbol: &str, name: &str, rank: u32, price: f64, change_24h: f64) -> Quote {
    Quote {
        rank: Some(rank),
        name: name.to_string(),
        ..create_test_quote(symbol, price, change_24h)
    }
}
