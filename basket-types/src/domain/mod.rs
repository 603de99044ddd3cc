//! Domain models for the shopping basket service.

pub mod currency;
pub mod product;
pub mod rates;

pub use currency::{CurrencyCode, QuoteKeyError};
pub use product::Product;
pub use rates::RateSnapshot;
