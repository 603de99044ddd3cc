//! Price conversion on top of the rate cache.

use std::sync::Arc;

use basket_types::{CurrencyCode, CurrencyFormatter, RateSource, RatesError};

use crate::rates::ExchangeRateCache;

/// Converts base-currency amounts into a selected display currency.
///
/// Stateless apart from the shared cache read: every call resolves the rate
/// through [`ExchangeRateCache::exchange_rate`] and multiplies. Cache
/// errors propagate unchanged.
pub struct PriceConverter<S: RateSource> {
    rates: Arc<ExchangeRateCache<S>>,
}

impl<S: RateSource> PriceConverter<S> {
    /// Creates a converter over the shared rate cache.
    pub fn new(rates: Arc<ExchangeRateCache<S>>) -> Self {
        Self { rates }
    }

    /// `amount` in the base currency, converted into `target`.
    pub async fn convert(&self, amount: f64, target: &CurrencyCode) -> Result<f64, RatesError> {
        let rate = self.rates.exchange_rate(target).await?;
        Ok(amount * rate)
    }

    /// Converts `amount` and renders it through the given formatter.
    pub async fn convert_display(
        &self,
        amount: f64,
        target: &CurrencyCode,
        formatter: &dyn CurrencyFormatter,
    ) -> Result<String, RatesError> {
        let converted = self.convert(amount, target).await?;
        Ok(formatter.format(converted, target))
    }
}
