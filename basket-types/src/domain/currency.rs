//! Currency code value type.

use std::fmt;

/// A normalized, uppercased currency code such as `EUR`.
///
/// Equality, hashing, and ordering are by code value. The rate payload
/// quotes every target as a composite `"<BASE><CODE>"` key while the base
/// currency arrives as a bare code, so construction comes in two distinctly
/// named flavors: [`CurrencyCode::from_quote_key`] strips the base prefix,
/// [`CurrencyCode::new`] takes the code as-is. Running a bare code through
/// the stripping constructor would drop half of it, so the key shape is
/// validated there instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

/// A composite quote key that cannot be reduced to a target code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed quote key {0:?}: expected exactly 6 characters")]
pub struct QuoteKeyError(pub String);

impl CurrencyCode {
    /// Creates a code directly from a bare code string, e.g. the payload's
    /// base-currency field. No prefix stripping takes place.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_ascii_uppercase())
    }

    /// Derives the target code from a composite quote key such as
    /// `"USDEUR"` by stripping the 3-character base prefix.
    ///
    /// Keys must be exactly six ASCII characters; anything else is rejected
    /// rather than silently truncated.
    pub fn from_quote_key(key: &str) -> Result<Self, QuoteKeyError> {
        if key.len() != 6 || !key.is_ascii() {
            return Err(QuoteKeyError(key.to_string()));
        }
        Ok(Self::new(&key[3..]))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
