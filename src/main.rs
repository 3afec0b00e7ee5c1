use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::Term;
use log::info;
use tokio::time::interval;

use cmc_terminal::api::CoinMarketCapClient;
use cmc_terminal::app::{App, FetchMode};
use cmc_terminal::cli::Cli;
use cmc_terminal::config::Config;
use cmc_terminal::display::TableOptions;
use cmc_terminal::{metrics, validation};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => cmc_terminal::logging::init(&path.to_string_lossy(), cli.debug)?,
        None => {
            let level = if cli.debug { "debug" } else { "info" };
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
                .init();
        }
    }
    metrics::init()?;

    // Config file is optional; flags and environment fill the gaps.
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| anyhow::anyhow!("failed to load configuration from {:?}: {}", path, e))?,
        None => Config::default(),
    };
    config.apply_env_overrides();
    validation::validate_api_key(&config.api.api_key)
        .map_err(|e| anyhow::anyhow!("{} (set {} or the config file)", e, cmc_terminal::config::API_KEY_ENV))?;
    info!("Configuration loaded");

    let options = TableOptions {
        convert: cli
            .convert
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or(config.display.convert.clone()),
        sort_by: cli.sort_by.unwrap_or(config.display.sort_by),
        descending: cli.descending || config.display.descending,
        search: cli.search.clone(),
        page_size: cli.page_size.unwrap_or(config.display.page_size),
        page: cli.page,
    };

    let mode = match cli.symbols {
        Some(symbols) => FetchMode::Symbols(symbols),
        None => FetchMode::Top(cli.limit.unwrap_or(config.refresh.limit)),
    };

    let term = Term::stdout();
    let color = !cli.no_color && std::io::stdout().is_terminal();

    let client = CoinMarketCapClient::new(
        config.api.api_key.clone(),
        Duration::from_secs(config.api.cache_ttl_secs),
    )?;
    let mut app = App::new(client, mode, options, color)?;

    if !cli.watch {
        let output = app.tick().await;
        term.write_str(&output)?;
        return Ok(());
    }

    // Timer-driven refresh: one synchronous fetch-then-render pass per
    // tick, so cycles never overlap.
    let interval_secs = cli.interval.unwrap_or(config.refresh.interval_secs).max(1);
    info!("Watching with a {}s refresh interval", interval_secs);
    let mut ticker = interval(Duration::from_secs(interval_secs));
    loop {
        ticker.tick().await;
        let output = app.tick().await;
        term.clear_screen()?;
        term.write_str(&output)?;
    }
}
