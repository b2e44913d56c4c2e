//! Market snapshot collector for the financial dashboard.
//!
//! Stock snapshots are embedded mock data. Crypto prices come from a
//! [`PriceSource`] when it answers and fall back to mock data otherwise.

pub mod fetch;
pub mod mock;

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MapError, MapResult};
pub use fetch::{CoinGecko, FetchError, Offline, PriceSource};

/// Subdirectory of the output dir receiving the snapshots
pub const OUTPUT_DIR: &str = "market";
pub const KOREAN_STOCKS_FILE: &str = "korean-stocks.json";
pub const US_STOCKS_FILE: &str = "us-stocks.json";
pub const CRYPTO_FILE: &str = "crypto-list.json";

/// Coins requested from the price source, with display name and ticker
pub const TRACKED_COINS: &[(&str, &str, &str)] = &[
    ("bitcoin", "Bitcoin", "BTC"),
    ("ethereum", "Ethereum", "ETH"),
    ("solana", "Solana", "SOL"),
    ("ripple", "XRP", "XRP"),
    ("cardano", "Cardano", "ADA"),
    ("polkadot", "Polkadot", "DOT"),
    ("dogecoin", "Dogecoin", "DOGE"),
    ("litecoin", "Litecoin", "LTC"),
    ("polygon", "Polygon", "MATIC"),
    ("uniswap", "Uniswap", "UNI"),
    ("chainlink", "Chainlink", "LINK"),
    ("bitcoin-cash", "Bitcoin Cash", "BCH"),
    ("eos", "EOS", "EOS"),
    ("monero", "Monero", "XMR"),
    ("stellar", "Stellar", "XLM"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub volume: u64,
    pub market_cap: u64,
    pub pe: f64,
    pub high: f64,
    pub low: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    pub last_update: String,
    pub market: String,
    pub currency: String,
    pub stocks: Vec<Stock>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crypto {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    pub market_cap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoSnapshot {
    pub last_update: String,
    pub market: String,
    pub currency: String,
    pub cryptos: Vec<Crypto>,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn collect_korean_stocks() -> StockSnapshot {
    let snapshot = StockSnapshot {
        last_update: timestamp(),
        market: "korean".into(),
        currency: "KRW".into(),
        stocks: mock::korean_stocks(),
    };
    info!(count = snapshot.stocks.len(), "collected korean stocks");
    snapshot
}

pub fn collect_us_stocks() -> StockSnapshot {
    let snapshot = StockSnapshot {
        last_update: timestamp(),
        market: "us".into(),
        currency: "USD".into(),
        stocks: mock::us_stocks(),
    };
    info!(count = snapshot.stocks.len(), "collected us stocks");
    snapshot
}

/// Live quotes when the source answers, embedded mock quotes otherwise
pub fn collect_crypto(source: &dyn PriceSource) -> CryptoSnapshot {
    let ids: Vec<&str> = TRACKED_COINS.iter().map(|(id, _, _)| *id).collect();
    let cryptos = match source.fetch(&ids) {
        Ok(quotes) => {
            let cryptos: Vec<Crypto> = TRACKED_COINS
                .iter()
                .filter_map(|(id, name, symbol)| {
                    quotes.get(*id).map(|q| Crypto {
                        id: id.to_string(),
                        name: name.to_string(),
                        symbol: symbol.to_string(),
                        price: q.usd,
                        change: q.usd_24h_change.unwrap_or(0.0),
                        volume_24h: q.usd_24h_vol.unwrap_or(0.0),
                        market_cap: q.usd_market_cap.unwrap_or(0.0),
                        high: None,
                        low: None,
                    })
                })
                .collect();
            if cryptos.is_empty() {
                warn!("price source knew none of the tracked coins, using mock data");
                mock::cryptos()
            } else {
                info!(count = cryptos.len(), "collected live crypto quotes");
                cryptos
            }
        }
        Err(e) => {
            warn!(error = %e, "crypto price lookup failed, using mock data");
            mock::cryptos()
        }
    };

    CryptoSnapshot {
        last_update: timestamp(),
        market: "crypto".into(),
        currency: "USD".into(),
        cryptos,
    }
}

/// Write pretty-printed JSON, creating parent directories as needed
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> MapResult<()> {
    let write_err = |source| MapError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(write_err)?;
    info!(path = %path.display(), "saved snapshot");
    Ok(())
}

/// Collect all three snapshots into `dir`
pub fn collect_all(source: &dyn PriceSource, dir: &Path) -> MapResult<()> {
    save_json(&collect_korean_stocks(), &dir.join(KOREAN_STOCKS_FILE))?;
    save_json(&collect_us_stocks(), &dir.join(US_STOCKS_FILE))?;
    save_json(&collect_crypto(source), &dir.join(CRYPTO_FILE))?;
    Ok(())
}
