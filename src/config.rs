use std::path::PathBuf;
use std::time::Duration;

pub const COINGECKO_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Where inputs come from and outputs go
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding `regions.json` and `polls_2026.json`
    pub data_dir: PathBuf,
    /// Directory receiving the generated maps and the `market/` snapshots
    pub output_dir: PathBuf,
    pub price_endpoint: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("."),
            price_endpoint: COINGECKO_ENDPOINT.to_string(),
            http_timeout: Duration::from_secs(10),
        }
    }
}
