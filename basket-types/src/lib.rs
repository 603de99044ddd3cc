//! # Basket Types
//!
//! Domain types and port traits for the shopping basket service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, Product, RateSnapshot)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Error taxonomy shared by the sources and their callers

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, Product, QuoteKeyError, RateSnapshot};
pub use error::{CatalogError, RatesError};
pub use ports::{CurrencyFormatter, ProductSource, RateSource};
