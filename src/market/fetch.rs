use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

/// Quote of one coin as returned by the simple-price endpoint
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CoinQuote {
    pub usd: f64,
    #[serde(default)]
    pub usd_market_cap: Option<f64>,
    #[serde(default)]
    pub usd_24h_vol: Option<f64>,
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}

pub type Quotes = HashMap<String, CoinQuote>;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("price request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("price source returned no quotes")]
    Empty,

    #[error("no price source available")]
    Unavailable,
}

/// Somewhere to get current USD quotes for coin ids
pub trait PriceSource {
    fn fetch(&self, ids: &[&str]) -> Result<Quotes, FetchError>;
}

/// Stand-in used when no HTTP client could be built
pub struct Offline;

impl PriceSource for Offline {
    fn fetch(&self, _ids: &[&str]) -> Result<Quotes, FetchError> {
        Err(FetchError::Unavailable)
    }
}

/// CoinGecko simple-price API, no key required
pub struct CoinGecko {
    client: Client,
    endpoint: String,
}

impl CoinGecko {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl PriceSource for CoinGecko {
    fn fetch(&self, ids: &[&str]) -> Result<Quotes, FetchError> {
        let ids = ids.join(",");
        let quotes: Quotes = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ids", ids.as_str()),
                ("vs_currencies", "usd"),
                ("include_market_cap", "true"),
                ("include_24hr_vol", "true"),
                ("include_24hr_change", "true"),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        if quotes.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_decodes_partial_fields() {
        let body = r#"{"bitcoin":{"usd":98425.5,"usd_24h_change":2.45},"eos":{"usd":0.7}}"#;
        let quotes: Quotes = serde_json::from_str(body).unwrap();
        assert_eq!(quotes["bitcoin"].usd_24h_change, Some(2.45));
        assert_eq!(quotes["bitcoin"].usd_market_cap, None);
        assert_eq!(quotes["eos"].usd, 0.7);
    }

    #[test]
    fn test_unreachable_endpoint_is_http_error() {
        let source = CoinGecko::new("http://127.0.0.1:9/api/v3/simple/price", Duration::from_millis(500))
            .unwrap();
        let err = source.fetch(&["bitcoin"]).unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
