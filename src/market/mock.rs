//! Embedded placeholder quotes used when no live source is wired up.

use crate::market::{Crypto, Stock};

#[allow(clippy::too_many_arguments)]
fn stock(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    volume: u64,
    market_cap: u64,
    pe: f64,
    (high, low): (f64, f64),
) -> Stock {
    Stock {
        id: symbol.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change,
        volume,
        market_cap,
        pe,
        high,
        low,
    }
}

pub fn korean_stocks() -> Vec<Stock> {
    vec![
        stock("005930", "삼성전자", 71500.0, 2.15, 18_500_000, 430_000_000_000_000, 13.2, (72000.0, 70800.0)),
        stock("000660", "SK하이닉스", 162000.0, 3.52, 5_200_000, 95_000_000_000_000, 11.8, (163500.0, 159800.0)),
        stock("373220", "LG에너지솔루션", 385000.0, -1.28, 310_000, 90_000_000_000_000, 78.4, (391000.0, 382500.0)),
        stock("207940", "삼성바이오로직스", 812000.0, 0.62, 95_000, 57_800_000_000_000, 65.1, (818000.0, 805000.0)),
        stock("005380", "현대차", 241500.0, 1.05, 820_000, 51_000_000_000_000, 5.4, (243000.0, 238500.0)),
        stock("035420", "NAVER", 186300.0, -0.85, 640_000, 30_200_000_000_000, 21.7, (189000.0, 185100.0)),
    ]
}

pub fn us_stocks() -> Vec<Stock> {
    vec![
        stock("AAPL", "Apple", 245.82, 1.25, 52_100_000, 3_850_000_000_000, 32.5, (248.50, 243.20)),
        stock("MSFT", "Microsoft", 438.10, 0.74, 21_400_000, 3_260_000_000_000, 36.1, (441.00, 434.60)),
        stock("NVDA", "NVIDIA", 134.25, 2.88, 245_000_000, 3_290_000_000_000, 53.2, (135.90, 130.40)),
        stock("GOOGL", "Alphabet", 191.40, -0.42, 24_800_000, 2_360_000_000_000, 23.9, (193.10, 190.20)),
        stock("AMZN", "Amazon", 224.90, 1.61, 38_600_000, 2_370_000_000_000, 47.3, (226.30, 221.00)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn crypto(id: &str, name: &str, symbol: &str, price: f64, change: f64, volume: f64, cap: f64, (high, low): (f64, f64)) -> Crypto {
    Crypto {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change,
        volume_24h: volume,
        market_cap: cap,
        high: Some(high),
        low: Some(low),
    }
}

pub fn cryptos() -> Vec<Crypto> {
    vec![
        crypto("bitcoin", "Bitcoin", "BTC", 98425.50, 2.45, 45_200_000_000.0, 1_950_000_000_000.0, (99850.00, 96200.00)),
        crypto("ethereum", "Ethereum", "ETH", 3480.20, 1.82, 18_700_000_000.0, 419_000_000_000.0, (3525.00, 3410.50)),
        crypto("solana", "Solana", "SOL", 192.35, 4.10, 3_900_000_000.0, 92_000_000_000.0, (196.80, 183.90)),
        crypto("ripple", "XRP", "XRP", 2.31, -1.15, 6_100_000_000.0, 132_000_000_000.0, (2.39, 2.27)),
    ]
}
