//! Error types for the shopping basket service.

use crate::domain::CurrencyCode;

/// Errors from loading, decoding, or querying exchange rates.
///
/// `Clone` so a single failed fetch can be handed to every caller that
/// joined the in-flight load. Failures are terminal for the request that
/// saw them but never poison shared state.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RatesError {
    #[error("failed to load exchange rate data: {0}")]
    DataLoading(String),

    #[error("malformed exchange rate payload: {0}")]
    Parsing(String),

    #[error("no rate available for {0}")]
    InvalidCurrencyCode(CurrencyCode),
}

/// Errors from loading or decoding the product catalog.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to load product data: {0}")]
    DataLoading(String),

    #[error("malformed product payload: {0}")]
    Parsing(String),
}
