//! Exchange-rate cache with single-flight fetch coalescing.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::Mutex;

use basket_types::{CurrencyCode, RateSnapshot, RateSource, RatesError};

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<RateSnapshot>, RatesError>>>;

/// Caching front for a [`RateSource`].
///
/// The first [`ExchangeRateCache::rates`] call starts a load; callers that
/// arrive while it is outstanding join the same in-flight future instead of
/// starting another. A successful snapshot is kept for the life of the
/// cache and later calls return it without touching the source. A failed
/// load is handed to everyone who joined it and then forgotten, so the next
/// caller retries from scratch.
pub struct ExchangeRateCache<S: RateSource> {
    source: Arc<S>,
    state: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
    snapshot: Option<Arc<RateSnapshot>>,
    inflight: Option<SharedFetch>,
}

impl<S: RateSource> ExchangeRateCache<S> {
    /// Creates an empty cache over the given source.
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Returns a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the rate snapshot, loading it at most once.
    ///
    /// The lock is held only to inspect and swap the cache slots; the load
    /// itself runs outside it, so reads of an already-cached snapshot never
    /// wait on a fetch.
    pub async fn rates(&self) -> Result<Arc<RateSnapshot>, RatesError> {
        let fetch = {
            let mut state = self.state.lock().await;
            if let Some(snapshot) = &state.snapshot {
                return Ok(Arc::clone(snapshot));
            }
            match &state.inflight {
                Some(fetch) => {
                    tracing::debug!("joining in-flight rate fetch");
                    fetch.clone()
                }
                None => {
                    tracing::debug!("starting rate fetch");
                    let source = Arc::clone(&self.source);
                    let fetch = async move { source.load().await.map(Arc::new) }
                        .boxed()
                        .shared();
                    state.inflight = Some(fetch.clone());
                    fetch
                }
            }
        };

        let result = fetch.clone().await;

        // Whichever waiter resumes first settles the cache; the ptr_eq
        // guard keeps a straggler from a finished round away from the
        // handle of a newer one.
        let mut state = self.state.lock().await;
        if state
            .inflight
            .as_ref()
            .is_some_and(|current| current.ptr_eq(&fetch))
        {
            state.inflight = None;
            match &result {
                Ok(snapshot) => {
                    tracing::info!(
                        base = %snapshot.base,
                        quotes = snapshot.quotes.len(),
                        "cached exchange rates"
                    );
                    state.snapshot = Some(Arc::clone(snapshot));
                }
                Err(error) => {
                    tracing::warn!(%error, "rate fetch failed");
                }
            }
        }
        result
    }

    /// Rate from the base currency into `currency`.
    ///
    /// The base currency converts to itself at exactly `1.0` without
    /// touching the quote map, so it resolves even when the map is empty.
    /// Any other code is looked up in the map; a miss is
    /// [`RatesError::InvalidCurrencyCode`].
    pub async fn exchange_rate(&self, currency: &CurrencyCode) -> Result<f64, RatesError> {
        let snapshot = self.rates().await?;
        if *currency == snapshot.base {
            return Ok(1.0);
        }
        snapshot
            .quotes
            .get(currency)
            .copied()
            .ok_or_else(|| RatesError::InvalidCurrencyCode(currency.clone()))
    }

    /// Every currency a caller may select: the quoted codes in ascending
    /// order, then the base currency appended once at the end. The base is
    /// never a quote key, so it appears exactly once.
    pub async fn available_currencies(&self) -> Result<Vec<CurrencyCode>, RatesError> {
        let snapshot = self.rates().await?;
        let mut codes: Vec<CurrencyCode> = snapshot.quotes.keys().cloned().collect();
        codes.push(snapshot.base.clone());
        Ok(codes)
    }
}
