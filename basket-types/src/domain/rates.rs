//! Exchange-rate snapshot decoded from the static rates payload.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::currency::{CurrencyCode, QuoteKeyError};

/// One loaded set of exchange rates, quoted against a single base currency.
///
/// `quotes` maps target codes to the rate from `base`. The base currency is
/// never a key in `quotes`: the payload omits it from its own quote list,
/// and a self-quote in a malformed payload is dropped during decode. Quote
/// keys iterate in ascending code order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct RateSnapshot {
    pub success: bool,
    pub timestamp: i64,
    pub base: CurrencyCode,
    pub quotes: BTreeMap<CurrencyCode, f64>,
}

/// The payload as it appears on disk, with composite `"<BASE><CODE>"` keys.
#[derive(Deserialize)]
struct RawSnapshot {
    success: bool,
    timestamp: i64,
    source: String,
    quotes: BTreeMap<String, f64>,
}

impl TryFrom<RawSnapshot> for RateSnapshot {
    type Error = QuoteKeyError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let base = CurrencyCode::new(raw.source);
        let mut quotes = BTreeMap::new();
        for (key, rate) in raw.quotes {
            let code = CurrencyCode::from_quote_key(&key)?;
            if code != base {
                quotes.insert(code, rate);
            }
        }
        Ok(Self {
            success: raw.success,
            timestamp: raw.timestamp,
            base,
            quotes,
        })
    }
}
