//! # Basket Files
//!
//! Concrete source adapters for the shopping basket service.
//! This crate implements the `RateSource` and `ProductSource` ports as
//! one-shot reads of static JSON payloads on disk.

mod products;
mod rates;

pub use products::FileProductSource;
pub use rates::FileRateSource;
