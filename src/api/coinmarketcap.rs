use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::types::{CmcEnvelope, CmcListing};
use crate::api::QuoteProvider;
use crate::error::{Error, Result};
use crate::metrics;
use crate::models::Quote;
use crate::utils::cache::Cache;

const API_BASE_URL: &str = "https://pro-api.coinmarketcap.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct CoinMarketCapClient {
    client: Client,
    api_key: String,
    base_url: String,
    quote_cache: Cache<Vec<Quote>>,
    listing_cache: Cache<Vec<Quote>>,
}

impl CoinMarketCapClient {
    pub fn new(api_key: String, cache_ttl: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::InternalError(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key,
            base_url: API_BASE_URL.to_string(),
            quote_cache: Cache::new(cache_ttl),
            listing_cache: Cache::new(cache_ttl),
        })
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One GET against the API. Single attempt per refresh cycle: a
    /// failed cycle is reported and the next tick tries again.
    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} params={:?}", url, params);
        metrics::API_CALLS.inc();
        let started = Instant::now();

        let result = self.do_request(&url, params).await;
        metrics::FETCH_LATENCY.observe(started.elapsed().as_secs_f64());
        if result.is_err() {
            metrics::API_ERRORS.inc();
        }
        result
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .query(params)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(Error::ApiAuthFailed(format!(
                    "request rejected with status {}",
                    response.status()
                )));
            }
            status => {
                return Err(Error::ApiError(format!(
                    "request failed with status {}",
                    status
                )));
            }
        }

        let envelope: CmcEnvelope<T> = response.json().await?;
        if envelope.status.error_code != 0 {
            let message = envelope
                .status
                .error_message
                .clone()
                .unwrap_or_else(|| format!("error code {}", envelope.status.error_code));
            if envelope.status.is_auth_error() {
                return Err(Error::ApiAuthFailed(message));
            }
            return Err(Error::ApiError(message));
        }
        envelope
            .data
            .ok_or_else(|| Error::ApiInvalidData("response contained no data".to_string()))
    }
}

#[async_trait]
impl QuoteProvider for CoinMarketCapClient {
    async fn latest_quotes(&self, symbols: &[String], convert: &str) -> Result<Vec<Quote>> {
        let joined = symbols.join(",");
        let cache_key = format!("{}:{}", joined, convert);
        if let Some(cached) = self.quote_cache.get(&cache_key).await {
            info!("Using cached quotes for: {}", joined);
            return Ok(cached);
        }

        let mut data: HashMap<String, CmcListing> = self
            .request(
                "cryptocurrency/quotes/latest",
                &[("symbol", joined.as_str()), ("convert", convert)],
            )
            .await?;

        // The endpoint returns a map keyed by symbol; rebuild the rows
        // in request order so the rendered table matches the input.
        let mut quotes = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let listing = data.remove(symbol).ok_or_else(|| {
                warn!("Requested symbol {} missing from response", symbol);
                Error::ApiInvalidData(format!("no data for symbol {}", symbol))
            })?;
            quotes.push(listing.into_quote(convert)?);
        }

        info!("Fetched {} quotes for: {}", quotes.len(), joined);
        self.quote_cache.set(cache_key, quotes.clone()).await;
        Ok(quotes)
    }

    async fn latest_listings(&self, limit: u32, convert: &str) -> Result<Vec<Quote>> {
        let cache_key = format!("top:{}:{}", limit, convert);
        if let Some(cached) = self.listing_cache.get(&cache_key).await {
            info!("Using cached listings for top {}", limit);
            return Ok(cached);
        }

        let data: Vec<CmcListing> = self
            .request(
                "cryptocurrency/listings/latest",
                &[
                    ("start", "1"),
                    ("limit", &limit.to_string()),
                    ("convert", convert),
                ],
            )
            .await?;

        let quotes = data
            .into_iter()
            .map(|listing| listing.into_quote(convert))
            .collect::<Result<Vec<_>>>()?;

        info!("Fetched {} listings", quotes.len());
        self.listing_cache.set(cache_key, quotes.clone()).await;
        Ok(quotes)
    }
}
