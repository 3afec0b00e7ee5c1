use crate::error::{Error, Result};

const MAX_SYMBOL_LEN: usize = 10;
const MAX_LISTING_LIMIT: u32 = 500;

/// Fiat codes the quote endpoint is asked to convert into.
const SUPPORTED_CONVERTS: &[&str] = &["USD", "EUR", "CNY", "GBP", "JPY", "KRW"];

pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        return Err(Error::ConfigError("API key cannot be empty".to_string()));
    }
    if api_key.len() < 16 {
        return Err(Error::ConfigError("API key is too short".to_string()));
    }
    Ok(())
}

pub fn validate_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(Error::ValidationError("Symbol cannot be empty".to_string()));
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(Error::ValidationError(format!(
            "Symbol '{}' is too long (max {} characters)",
            symbol, MAX_SYMBOL_LEN
        )));
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(Error::ValidationError(format!(
            "Symbol '{}' must contain only uppercase letters and digits",
            symbol
        )));
    }
    Ok(())
}

/// Uppercases, trims, validates and deduplicates a raw symbol list,
/// preserving first-occurrence order. The result is never empty.
pub fn normalize_symbols(raw: &[String]) -> Result<Vec<String>> {
    let mut symbols = Vec::new();
    for entry in raw {
        let symbol = entry.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            continue;
        }
        validate_symbol(&symbol)?;
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    if symbols.is_empty() {
        return Err(Error::ValidationError(
            "Symbol list cannot be empty".to_string(),
        ));
    }
    Ok(symbols)
}

pub fn validate_limit(limit: u32) -> Result<()> {
    if limit == 0 || limit > MAX_LISTING_LIMIT {
        return Err(Error::ValidationError(format!(
            "Listing limit must be between 1 and {}",
            MAX_LISTING_LIMIT
        )));
    }
    Ok(())
}

pub fn validate_convert(convert: &str) -> Result<()> {
    if !SUPPORTED_CONVERTS.contains(&convert) {
        return Err(Error::ValidationError(format!(
            "Unsupported convert currency '{}' (supported: {})",
            convert,
            SUPPORTED_CONVERTS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_dedups_in_order() {
        let raw = vec![
            "btc".to_string(),
            " eth ".to_string(),
            "BTC".to_string(),
            "sol".to_string(),
        ];
        let symbols = normalize_symbols(&raw).unwrap();
        assert_eq!(symbols, vec!["BTC", "ETH", "SOL"]);
    }

    #[test]
    fn normalize_rejects_empty_list() {
        assert!(normalize_symbols(&[]).is_err());
        assert!(normalize_symbols(&["  ".to_string()]).is_err());
    }

    #[test]
    fn symbols_with_punctuation_are_rejected() {
        assert!(validate_symbol("BTC/USD").is_err());
        assert!(validate_symbol("VERYLONGSYMBOL").is_err());
        assert!(validate_symbol("BTC").is_ok());
        assert!(validate_symbol("1INCH").is_ok());
    }

    #[test]
    fn limit_bounds() {
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(500).is_ok());
        assert!(validate_limit(501).is_err());
    }

    #[test]
    fn convert_must_be_supported() {
        assert!(validate_convert("USD").is_ok());
        assert!(validate_convert("EUR").is_ok());
        assert!(validate_convert("usd").is_err());
        assert!(validate_convert("DOGE").is_err());
    }
}
