use async_trait::async_trait;

use crate::error::Result;
use crate::models::Quote;

pub mod coinmarketcap;
pub mod types;

pub use coinmarketcap::CoinMarketCapClient;

/// Seam between the refresh cycle and the quote endpoint. The app only
/// ever sees this trait; tests substitute a scripted implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteProvider {
    /// Fetch quotes for an explicit symbol list. The returned rows are
    /// in the same order as `symbols`.
    async fn latest_quotes(&self, symbols: &[String], convert: &str) -> Result<Vec<Quote>>;

    /// Fetch the top `limit` listings by market-cap rank.
    async fn latest_listings(&self, limit: u32, convert: &str) -> Result<Vec<Quote>>;
}
