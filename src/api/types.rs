use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Quote;

/// Envelope every CoinMarketCap response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct CmcEnvelope<T> {
    pub status: CmcStatus,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct CmcStatus {
    pub error_code: u32,
    pub error_message: Option<String>,
}

impl CmcStatus {
    /// CMC reports key problems inside a 200 body as well as via HTTP
    /// status codes. 1001 = invalid key, 1002 = missing key.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.error_code, 1001 | 1002)
    }
}

/// One cryptocurrency entry as returned by `listings/latest` and
/// `quotes/latest`. The quote map is keyed by convert currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CmcListing {
    pub name: String,
    pub symbol: String,
    pub cmc_rank: Option<u32>,
    pub quote: HashMap<String, CmcQuote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmcQuote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CmcListing {
    /// Flattens the wire entry for one convert currency into a domain
    /// Quote. A missing or non-finite price is malformed data; the
    /// remaining numeric fields are optional on the wire and stay so.
    pub fn into_quote(self, convert: &str) -> Result<Quote> {
        let quote = self.quote.get(convert).ok_or_else(|| {
            Error::ApiInvalidData(format!(
                "no {} quote for symbol {}",
                convert, self.symbol
            ))
        })?;
        let price = match quote.price {
            Some(p) if p.is_finite() => p,
            _ => {
                return Err(Error::ApiInvalidData(format!(
                    "missing price for symbol {}",
                    self.symbol
                )))
            }
        };
        Ok(Quote {
            rank: self.cmc_rank,
            name: self.name,
            symbol: self.symbol,
            price,
            percent_change_1h: quote.percent_change_1h,
            percent_change_24h: quote.percent_change_24h,
            percent_change_7d: quote.percent_change_7d,
            market_cap: quote.market_cap,
            volume_24h: quote.volume_24h,
            last_updated: quote.last_updated.unwrap_or_else(Utc::now),
        })
    }
}
