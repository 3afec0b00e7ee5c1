use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};

use crate::models::{Quote, Snapshot};

/// Column a table can be ordered by. Mirrors the sort choices the
/// quote endpoint itself understands, so the set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Rank,
    Price,
    Change24h,
    MarketCap,
    Volume,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Rank
    }
}

/// How one render pass shapes the snapshot: filter, sort, paginate.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub convert: String,
    pub sort_by: SortKey,
    pub descending: bool,
    pub search: Option<String>,
    pub page_size: usize,
    /// 1-based; clamped to the last page.
    pub page: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            convert: "USD".to_string(),
            sort_by: SortKey::default(),
            descending: false,
            search: None,
            page_size: 20,
            page: 1,
        }
    }
}

/// One shaped page of quotes, ready to render.
#[derive(Debug)]
pub struct Page<'a> {
    pub rows: Vec<&'a Quote>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

/// Filter, sort and paginate a row set. Pure: identical inputs shape
/// into identical pages.
pub fn apply<'a>(quotes: &'a [Quote], opts: &TableOptions) -> Page<'a> {
    let mut rows: Vec<&Quote> = match &opts.search {
        Some(needle) if !needle.trim().is_empty() => {
            let needle = needle.trim().to_lowercase();
            quotes
                .iter()
                .filter(|q| {
                    q.name.to_lowercase().contains(&needle)
                        || q.symbol.to_lowercase().contains(&needle)
                })
                .collect()
        }
        _ => quotes.iter().collect(),
    };

    rows.sort_by(|a, b| {
        // None sorts after Some regardless of direction.
        match (sort_key(a, opts.sort_by), sort_key(b, opts.sort_by)) {
            (Some(x), Some(y)) => {
                let ordering = x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal);
                if opts.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });

    let total_rows = rows.len();
    let page_size = opts.page_size.max(1);
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let page = opts.page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let rows = rows
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        rows,
        page,
        total_pages,
        total_rows,
    }
}

fn sort_key(quote: &Quote, key: SortKey) -> Option<f64> {
    match key {
        SortKey::Rank => quote.rank.map(f64::from),
        SortKey::Price => Some(quote.price),
        SortKey::Change24h => quote.percent_change_24h,
        SortKey::MarketCap => quote.market_cap,
        SortKey::Volume => quote.volume_24h,
    }
}

/// Compact human scale for large magnitudes: 1.23T, 4.56B, 7.89M, 1.23K.
pub fn human_num(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}

/// Prices above one unit get two decimals with thousands separators;
/// small-cap prices keep four decimals so they stay distinguishable.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }
    if price.abs() >= 1.0 {
        group_thousands(price, 2)
    } else {
        format!("{:.4}", price)
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:+.2}%", v),
        _ => "-".to_string(),
    }
}

fn pct_cell(value: Option<f64>, width: usize, color: bool) -> String {
    let text = format!("{:>width$}", format_pct(value), width = width);
    if !color {
        return text;
    }
    match value {
        Some(v) if v > 0.0 => style(text).green().to_string(),
        Some(v) if v < 0.0 => style(text).red().to_string(),
        _ => text,
    }
}

const NAME_WIDTH: usize = 18;

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let cut: String = name.chars().take(NAME_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}

/// Renders one shaped page as a fixed-width table. Percent columns are
/// green/red when `color` is on; column content is padded before
/// styling so escape codes never break the alignment.
pub fn render_table(page: &Page<'_>, opts: &TableOptions, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<width$}  {:<8}  {:>16}  {:>9}  {:>9}  {:>9}  {:>10}  {:>10}\n",
        "#",
        "Name",
        "Symbol",
        format!("Price ({})", opts.convert),
        "1h %",
        "24h %",
        "7d %",
        "Mkt Cap",
        "Vol 24h",
        width = NAME_WIDTH,
    ));
    out.push_str(&"-".repeat(4 + NAME_WIDTH + 8 + 16 + 9 + 9 + 9 + 10 + 10 + 16));
    out.push('\n');

    for quote in &page.rows {
        let rank = quote
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:<8}  {:>16}  {}  {}  {}  {:>10}  {:>10}\n",
            rank,
            truncate_name(&quote.name),
            quote.symbol,
            format_price(quote.price),
            pct_cell(quote.percent_change_1h, 9, color),
            pct_cell(quote.percent_change_24h, 9, color),
            pct_cell(quote.percent_change_7d, 9, color),
            quote.market_cap.map(human_num).unwrap_or_else(|| "-".to_string()),
            quote.volume_24h.map(human_num).unwrap_or_else(|| "-".to_string()),
            width = NAME_WIDTH,
        ));
    }

    out.push_str(&format!(
        "page {}/{} | {} rows\n",
        page.page, page.total_pages, page.total_rows
    ));
    out
}

/// Header metrics row: total market cap, BTC/ETH dominance, 24h volume.
pub fn render_summary(snapshot: &Snapshot) -> String {
    let total_cap = snapshot.total_market_cap();
    let total_volume = snapshot.total_volume_24h();
    let dominance = |symbol: &str| {
        snapshot
            .dominance(symbol)
            .map(|d| format!("{:.2}%", d))
            .unwrap_or_else(|| "-".to_string())
    };
    format!(
        "Total Mkt Cap: {}  |  BTC: {}  ETH: {}  |  24h Vol: {}\n",
        human_num(total_cap),
        dominance("BTC"),
        dominance("ETH"),
        human_num(total_volume),
    )
}

/// Status line under the table: data timestamp plus session counters.
pub fn render_footer(snapshot: &Snapshot, cycles: u64, api_calls: u64, api_errors: u64) -> String {
    format!(
        "data as of {} | cycles: {} | api calls: {} | errors: {}\n",
        snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"),
        cycles,
        api_calls,
        api_errors,
    )
}
