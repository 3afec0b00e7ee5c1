use std::path::PathBuf;

use clap::Parser;

use crate::display::SortKey;

#[derive(Parser, Debug)]
#[command(author, version, about = "CoinMarketCap terminal: quotes and listings as a table", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma-separated ticker symbols (e.g. BTC,ETH); when absent the
    /// top listings are fetched instead
    #[arg(short, long, value_delimiter = ',')]
    pub symbols: Option<Vec<String>>,

    /// How many listings to fetch in listings mode
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Fiat currency to convert prices into
    #[arg(long)]
    pub convert: Option<String>,

    /// Keep refreshing on an interval instead of exiting after one fetch
    #[arg(short, long)]
    pub watch: bool,

    /// Refresh interval in seconds (with --watch)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Column to sort by
    #[arg(long, value_enum)]
    pub sort_by: Option<SortKey>,

    /// Sort high to low
    #[arg(long)]
    pub descending: bool,

    /// Only show rows whose name or symbol contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
