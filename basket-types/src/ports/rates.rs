//! Exchange-rate source port.

use crate::domain::RateSnapshot;
use crate::error::RatesError;

/// Port trait for loading the exchange-rate snapshot.
///
/// A source performs one full load per call from its static storage.
/// Caching and request coalescing are the caller's concern, so an
/// implementation must tolerate being asked again after a failure.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Loads the rate snapshot.
    async fn load(&self) -> Result<RateSnapshot, RatesError>;
}
