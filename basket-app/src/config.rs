//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use basket_types::CurrencyCode;

/// Application configuration.
pub struct Config {
    pub rates_path: PathBuf,
    pub products_path: PathBuf,
    /// When set, the demo prints the total in this currency only instead
    /// of every available one.
    pub display_currency: Option<CurrencyCode>,
}

impl Config {
    /// Loads configuration from environment variables. File paths default
    /// to the bundled sample payloads under this crate's `data/` directory.
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");

        let rates_path = env::var("BASKET_RATES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("rates.json"));

        let products_path = env::var("BASKET_PRODUCTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("products.json"));

        let display_currency = match env::var("BASKET_DISPLAY_CURRENCY") {
            Ok(code) => {
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    anyhow::bail!("BASKET_DISPLAY_CURRENCY must be a 3-letter code, got {code:?}");
                }
                Some(CurrencyCode::new(code))
            }
            Err(_) => None,
        };

        Ok(Self {
            rates_path,
            products_path,
            display_currency,
        })
    }
}
