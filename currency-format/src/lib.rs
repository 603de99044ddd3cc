//! Currency display formatting.
//!
//! A pure, stateless implementation of the `CurrencyFormatter` port: codes
//! with a known symbol render as `€22.50`, anything else falls back to
//! `22.50 EUR`. Amounts always carry two decimals.

use basket_types::{CurrencyCode, CurrencyFormatter};

/// Formatter that prefixes amounts with the currency symbol.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolFormatter;

fn symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "AUD" | "CAD" | "NZD" | "HKD" | "SGD" | "MXN" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "INR" => Some("₹"),
        "JPY" | "CNY" => Some("¥"),
        "KRW" => Some("₩"),
        "PLN" => Some("zł"),
        "THB" => Some("฿"),
        _ => None,
    }
}

impl CurrencyFormatter for SymbolFormatter {
    fn format(&self, value: f64, code: &CurrencyCode) -> String {
        match symbol(code.as_str()) {
            Some(symbol) => format!("{symbol}{value:.2}"),
            None => format!("{value:.2} {code}"),
        }
    }
}
