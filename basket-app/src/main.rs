//! # Basket Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the file-backed sources
//! - Create the rate cache, basket, and price converter
//! - Run a checkout pass: fill the basket and print its total in each
//!   selectable currency

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basket_files::{FileProductSource, FileRateSource};
use basket_service::{Basket, ExchangeRateCache, PriceConverter};
use basket_types::ProductSource;
use currency_format::SymbolFormatter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,basket_app=debug,basket_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!(
        rates = %config.rates_path.display(),
        products = %config.products_path.display(),
        "starting basket demo"
    );

    // Wire the services over their file-backed sources
    let catalog = FileProductSource::new(&config.products_path).load().await?;
    let rates = Arc::new(ExchangeRateCache::new(FileRateSource::new(
        &config.rates_path,
    )));
    let converter = PriceConverter::new(Arc::clone(&rates));
    let formatter = SymbolFormatter;

    let mut basket = Basket::new();
    let totals = basket.watch_total();

    // One of everything, plus a second unit of the first catalog entry.
    for product in &catalog {
        basket.add_item(product);
    }
    if let Some(first) = catalog.first() {
        basket.add_item(first);
    }

    let total = *totals.borrow();
    tracing::info!(total, lines = basket.lines().len(), "basket assembled");

    let currencies = match &config.display_currency {
        Some(code) => vec![code.clone()],
        None => rates.available_currencies().await?,
    };

    for currency in &currencies {
        let display = converter.convert_display(total, currency, &formatter).await?;
        println!("{currency}: {display}");
    }

    Ok(())
}
