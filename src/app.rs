use console::style;
use log::{error, info};

use crate::api::QuoteProvider;
use crate::display::{self, TableOptions};
use crate::error::Result;
use crate::metrics;
use crate::models::Snapshot;
use crate::validation;

/// What one refresh cycle asks the provider for.
#[derive(Debug, Clone)]
pub enum FetchMode {
    /// Explicit symbol list; rows come back in request order.
    Symbols(Vec<String>),
    /// Top-N listings by market-cap rank.
    Top(u32),
}

/// Drives fetch-then-render cycles against a quote provider and holds
/// the last successful snapshot. Cycles run strictly one at a time on
/// the calling task, so fetches never overlap.
pub struct App<P: QuoteProvider> {
    provider: P,
    mode: FetchMode,
    options: TableOptions,
    color: bool,
    snapshot: Option<Snapshot>,
}

impl<P: QuoteProvider> App<P> {
    /// Validates the fetch mode and display options up front; a bad
    /// symbol or limit never reaches the network.
    pub fn new(provider: P, mode: FetchMode, options: TableOptions, color: bool) -> Result<Self> {
        validation::validate_convert(&options.convert)?;
        let mode = match mode {
            FetchMode::Symbols(raw) => FetchMode::Symbols(validation::normalize_symbols(&raw)?),
            FetchMode::Top(limit) => {
                validation::validate_limit(limit)?;
                FetchMode::Top(limit)
            }
        };
        Ok(Self {
            provider,
            mode,
            options,
            color,
            snapshot: None,
        })
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// One fetch pass. On success the snapshot is replaced wholesale;
    /// on any error it is left untouched, so the displayed rows always
    /// come from a single successful response.
    pub async fn refresh(&mut self) -> Result<()> {
        metrics::REFRESH_CYCLES.inc();
        let quotes = match &self.mode {
            FetchMode::Symbols(symbols) => {
                self.provider
                    .latest_quotes(symbols, &self.options.convert)
                    .await?
            }
            FetchMode::Top(limit) => {
                self.provider
                    .latest_listings(*limit, &self.options.convert)
                    .await?
            }
        };
        info!("Refresh cycle fetched {} quotes", quotes.len());
        self.snapshot = Some(Snapshot::new(quotes, self.options.convert.clone()));
        Ok(())
    }

    /// Renders whatever the last successful cycle produced.
    pub fn render(&self) -> String {
        let snapshot = match &self.snapshot {
            Some(s) => s,
            None => return "no data fetched yet\n".to_string(),
        };
        let page = display::apply(&snapshot.quotes, &self.options);
        let mut out = String::new();
        out.push_str(&display::render_summary(snapshot));
        out.push_str(&display::render_table(&page, &self.options, self.color));
        out.push_str(&display::render_footer(
            snapshot,
            metrics::REFRESH_CYCLES.get() as u64,
            metrics::API_CALLS.get() as u64,
            metrics::API_ERRORS.get() as u64,
        ));
        out
    }

    /// One full refresh cycle: fetch, then render. A failed fetch keeps
    /// the prior display state and appends the single user-visible
    /// error line instead.
    pub async fn tick(&mut self) -> String {
        match self.refresh().await {
            Ok(()) => self.render(),
            Err(err) => {
                error!("Refresh cycle failed: {}", err);
                let message = err.user_message();
                let message = if self.color {
                    style(message).red().to_string()
                } else {
                    message
                };
                match &self.snapshot {
                    Some(_) => format!("{}{}\n", self.render(), message),
                    None => format!("{}\n", message),
                }
            }
        }
    }
}
