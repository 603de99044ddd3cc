//! Catalog product value type.

use serde::Deserialize;

/// An immutable catalog entry.
///
/// Products carry no separate identifier: the basket treats the full value
/// (name, price, unit label) as the line identity. `price` is a
/// non-negative amount in the base currency; `quantity_description` is a
/// free-text unit label such as "per kg".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity_description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            quantity_description: quantity_description.into(),
        }
    }
}
