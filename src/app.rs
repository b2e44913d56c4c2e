use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::market::{CoinGecko, Offline};
use crate::{election, grid, market};

/// Which generator to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Grid,
    Election,
    Market,
    All,
}

impl Target {
    /// Parse the optional positional argument; absent means everything
    pub fn parse(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("all") => Ok(Target::All),
            Some("grid") => Ok(Target::Grid),
            Some("election") => Ok(Target::Election),
            Some("market") => Ok(Target::Market),
            Some(other) => bail!("unknown target '{other}' (expected grid, election, market or all)"),
        }
    }

    fn includes(self, other: Target) -> bool {
        self == Target::All || self == other
    }
}

pub fn run(config: &Config, target: Target) -> Result<()> {
    if target.includes(Target::Grid) {
        let path = config.output_dir.join(grid::OUTPUT_FILE);
        grid::build_map()
            .context("grid tables reference a missing style")?
            .save(&path)?;
    }

    if target.includes(Target::Election) {
        let (regions, polls) = election::load(&config.data_dir)?;
        let path = config.output_dir.join(election::OUTPUT_FILE);
        election::build_map(&regions, &polls).save(&path)?;
        // Raw poll table next to the map
        election::save_csv(&regions, &polls, &config.output_dir.join(election::CSV_FILE))?;
    }

    if target.includes(Target::Market) {
        let dir = config.output_dir.join(market::OUTPUT_DIR);
        match CoinGecko::new(config.price_endpoint.as_str(), config.http_timeout) {
            Ok(source) => market::collect_all(&source, &dir)?,
            Err(e) => {
                warn!(error = %e, "could not build HTTP client");
                market::collect_all(&Offline, &dir)?;
            }
        }
    }

    info!(?target, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_target() {
        assert_eq!(Target::parse(None).unwrap(), Target::All);
        assert_eq!(Target::parse(Some("grid")).unwrap(), Target::Grid);
        assert_eq!(Target::parse(Some("market")).unwrap(), Target::Market);
        assert!(Target::parse(Some("--help")).is_err());
    }

    #[test]
    fn test_run_grid_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: dir.path().to_path_buf(),
            data_dir: PathBuf::from("does-not-exist"),
            ..Config::default()
        };
        run(&config, Target::Grid).unwrap();
        assert!(dir.path().join(grid::OUTPUT_FILE).is_file());
        assert!(!dir.path().join(election::OUTPUT_FILE).exists());
    }

    #[test]
    fn test_run_election_missing_data_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: dir.path().to_path_buf(),
            data_dir: dir.path().join("none"),
            ..Config::default()
        };
        let err = run(&config, Target::Election).unwrap_err();
        assert!(err.to_string().contains("regions.json"));
    }

    #[test]
    fn test_run_election_with_bundled_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: dir.path().to_path_buf(),
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            ..Config::default()
        };
        run(&config, Target::Election).unwrap();
        let html = std::fs::read_to_string(dir.path().join(election::OUTPUT_FILE)).unwrap();
        assert!(html.contains("📍 서울"));
        let csv = std::fs::read_to_string(dir.path().join(election::CSV_FILE)).unwrap();
        assert!(csv.starts_with("날짜,지역,후보자,정당,지지도(%)\n"));
    }

    #[test]
    fn test_run_market_writes_under_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: dir.path().to_path_buf(),
            price_endpoint: "http://127.0.0.1:9/simple/price".into(),
            http_timeout: std::time::Duration::from_secs(2),
            ..Config::default()
        };
        run(&config, Target::Market).unwrap();

        let market_dir = dir.path().join(market::OUTPUT_DIR);
        for file in [market::KOREAN_STOCKS_FILE, market::US_STOCKS_FILE, market::CRYPTO_FILE] {
            assert!(market_dir.join(file).is_file(), "{file}");
        }
        let crypto = std::fs::read_to_string(market_dir.join(market::CRYPTO_FILE)).unwrap();
        let snapshot: market::CryptoSnapshot = serde_json::from_str(&crypto).unwrap();
        let symbols: Vec<String> = snapshot.cryptos.into_iter().map(|c| c.symbol).collect();
        let mock: Vec<String> = market::mock::cryptos().into_iter().map(|c| c.symbol).collect();
        assert_eq!(symbols, mock);
    }
}
