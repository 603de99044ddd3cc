//! End-to-end checkout flow over file-backed sources.

use std::sync::Arc;

use basket_files::{FileProductSource, FileRateSource};
use basket_service::{Basket, ExchangeRateCache, PriceConverter};
use basket_types::{CurrencyCode, ProductSource, RatesError};
use currency_format::SymbolFormatter;

const RATES: &str = r#"{
    "success": true,
    "timestamp": 1713724800,
    "source": "USD",
    "quotes": { "USDEUR": 0.9, "USDGBP": 0.8 }
}"#;

const PRODUCTS: &str = r#"[
    { "name": "Granola", "price": 10.0, "quantityDescription": "per box" },
    { "name": "Oat milk", "price": 5.0, "quantityDescription": "per carton" }
]"#;

#[tokio::test]
async fn test_checkout_total_converts_into_selected_currency() {
    let dir = tempfile::tempdir().unwrap();
    let rates_path = dir.path().join("rates.json");
    let products_path = dir.path().join("products.json");
    std::fs::write(&rates_path, RATES).unwrap();
    std::fs::write(&products_path, PRODUCTS).unwrap();

    let catalog = FileProductSource::new(&products_path).load().await.unwrap();
    let rates = Arc::new(ExchangeRateCache::new(FileRateSource::new(&rates_path)));
    let converter = PriceConverter::new(Arc::clone(&rates));

    let mut basket = Basket::new();
    basket.add_item(&catalog[0]);
    basket.add_item(&catalog[0]);
    basket.add_item(&catalog[1]);

    assert_eq!(basket.total(), 25.0);

    let eur = converter
        .convert(basket.total(), &CurrencyCode::new("EUR"))
        .await
        .unwrap();
    assert!((eur - 22.5).abs() < 1e-9);

    let display = converter
        .convert_display(basket.total(), &CurrencyCode::new("EUR"), &SymbolFormatter)
        .await
        .unwrap();
    assert_eq!(display, "€22.50");

    let currencies = rates.available_currencies().await.unwrap();
    assert_eq!(
        currencies,
        vec![
            CurrencyCode::new("EUR"),
            CurrencyCode::new("GBP"),
            CurrencyCode::new("USD"),
        ]
    );
}

#[tokio::test]
async fn test_checkout_surfaces_missing_rates_without_breaking_basket() {
    let dir = tempfile::tempdir().unwrap();
    let products_path = dir.path().join("products.json");
    std::fs::write(&products_path, PRODUCTS).unwrap();

    let catalog = FileProductSource::new(&products_path).load().await.unwrap();
    let rates = Arc::new(ExchangeRateCache::new(FileRateSource::new(
        dir.path().join("missing.json"),
    )));
    let converter = PriceConverter::new(Arc::clone(&rates));

    let mut basket = Basket::new();
    basket.add_item(&catalog[0]);

    let result = converter
        .convert(basket.total(), &CurrencyCode::new("EUR"))
        .await;
    assert!(matches!(result, Err(RatesError::DataLoading(_))));

    // The basket itself is untouched by the rates failure.
    assert_eq!(basket.total(), 10.0);
    assert_eq!(basket.lines().len(), 1);
}
