//! Currency display formatting port.

use crate::domain::CurrencyCode;

/// Pure, stateless rendering of a monetary amount for display.
pub trait CurrencyFormatter: Send + Sync {
    /// Renders `value` in the given currency, e.g. `€22.50`.
    fn format(&self, value: f64, code: &CurrencyCode) -> String;
}
