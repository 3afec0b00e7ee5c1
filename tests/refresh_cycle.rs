mod common;

use cmc_terminal::app::{App, FetchMode};
use cmc_terminal::display::TableOptions;
use cmc_terminal::error::Error;

use common::{create_test_quote, ScriptedProvider};

fn btc_eth() -> Vec<cmc_terminal::models::Quote> {
    vec![
        create_test_quote("BTC", 65000.0, 1.2),
        create_test_quote("ETH", 3400.0, -0.5),
    ]
}

fn symbols(list: &[&str]) -> FetchMode {
    FetchMode::Symbols(list.iter().map(|s| s.to_string()).collect())
}

#[tokio::test]
async fn fetch_renders_rows_in_request_order() {
    let provider = ScriptedProvider::new(vec![Ok(btc_eth())]);
    let mut app = App::new(provider, symbols(&["BTC", "ETH"]), TableOptions::default(), false)
        .expect("valid inputs");

    let output = app.tick().await;

    let snapshot = app.snapshot().expect("snapshot after success");
    assert_eq!(snapshot.quotes.len(), 2);
    assert_eq!(snapshot.quotes[0].symbol, "BTC");
    assert_eq!(snapshot.quotes[1].symbol, "ETH");

    // rendered rows carry the example values, in request order
    let lines: Vec<&str> = output.lines().collect();
    let btc_row = lines
        .iter()
        .position(|l| l.contains("65,000.00"))
        .expect("BTC row rendered");
    let eth_row = lines
        .iter()
        .position(|l| l.contains("3,400.00"))
        .expect("ETH row rendered");
    assert!(lines[btc_row].contains("BTC"));
    assert!(lines[btc_row].contains("+1.20%"));
    assert!(lines[eth_row].contains("ETH"));
    assert!(lines[eth_row].contains("-0.50%"));
    assert!(btc_row < eth_row);
}

#[tokio::test]
async fn malformed_response_keeps_prior_display_state() {
    let provider = ScriptedProvider::new(vec![
        Ok(btc_eth()),
        Err(Error::ApiInvalidData("missing price for symbol BTC".to_string())),
    ]);
    let mut app = App::new(provider, symbols(&["BTC", "ETH"]), TableOptions::default(), false)
        .expect("valid inputs");

    let first = app.tick().await;
    assert!(!first.contains("quote fetch failed"));

    let second = app.tick().await;
    assert!(second.contains("quote fetch failed"));
    // prior rows are still on screen and the snapshot is unchanged
    assert!(second.contains("65,000.00"));
    assert_eq!(app.snapshot().unwrap().quotes.len(), 2);
}

#[tokio::test]
async fn invalid_api_key_renders_no_quote_data() {
    let provider = ScriptedProvider::new(vec![Err(Error::ApiAuthFailed(
        "Invalid API key".to_string(),
    ))]);
    let mut app = App::new(provider, symbols(&["BTC"]), TableOptions::default(), false)
        .expect("valid inputs");

    let output = app.tick().await;
    assert!(output.contains("quote fetch failed"));
    assert!(!output.contains("BTC "));
    assert!(app.snapshot().is_none());
}

#[tokio::test]
async fn identical_responses_produce_identical_output() {
    let provider = ScriptedProvider::new(vec![Ok(btc_eth()), Ok(btc_eth())]);
    let mut app = App::new(provider, symbols(&["BTC", "ETH"]), TableOptions::default(), false)
        .expect("valid inputs");

    let first = app.tick().await;
    let second = app.tick().await;

    // strip the footer: timestamps and session counters move, rows must not
    let rows = |s: &str| {
        s.lines()
            .filter(|l| !l.starts_with("data as of"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(rows(&first), rows(&second));
}

#[tokio::test]
async fn listings_mode_renders_top_rows() {
    let provider = ScriptedProvider::new(vec![Ok(btc_eth())]);
    let mut app = App::new(provider, FetchMode::Top(2), TableOptions::default(), false)
        .expect("valid inputs");

    let output = app.tick().await;
    assert!(output.contains("Total Mkt Cap"));
    assert!(output.contains("BTC"));
    assert!(output.contains("page 1/1 | 2 rows"));
}
