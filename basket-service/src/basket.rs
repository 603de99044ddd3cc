//! Shopping basket aggregate.

use basket_types::Product;
use tokio::sync::watch;

/// One (product, quantity) pair inside the basket. Quantity is at least 1;
/// a line that would reach 0 is removed instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine {
    pub product: Product,
    pub quantity: u32,
}

/// Mutable basket of catalog products.
///
/// Lines keep insertion order. Every successful mutation recomputes the
/// total and publishes the new line list followed by the new total on the
/// watch channels, back-to-back under the same `&mut` borrow, so an
/// observer never pairs a total with a different generation of lines.
/// Subscribers receive the current value immediately and every publication
/// after that.
///
/// The basket is an owned, injectable instance: callers that need to share
/// it decide the ownership model themselves.
pub struct Basket {
    lines: Vec<BasketLine>,
    items_tx: watch::Sender<Vec<BasketLine>>,
    total_tx: watch::Sender<f64>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            items_tx: watch::Sender::new(Vec::new()),
            total_tx: watch::Sender::new(0.0),
        }
    }

    /// Adds one unit of `product`, merging into an existing line when the
    /// full product value matches.
    pub fn add_item(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|line| line.product == *product) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(BasketLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
        tracing::debug!(product = %product.name, "added item to basket");
        self.publish();
    }

    /// Removes one unit of `product`. A line at quantity 1 disappears
    /// entirely. Removing a product that is not in the basket is a silent
    /// no-op and publishes nothing.
    pub fn remove_item(&mut self, product: &Product) {
        let Some(index) = self.lines.iter().position(|line| line.product == *product) else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        tracing::debug!(product = %product.name, "removed item from basket");
        self.publish();
    }

    /// Sum of price × quantity over the current lines.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.product.price * f64::from(line.quantity))
            .sum()
    }

    /// Whether a product with this name is in the basket.
    ///
    /// Membership is by name only: a product that shares its name with a
    /// basket line but differs in price or unit label still counts as
    /// present, even though [`Basket::add_item`] and
    /// [`Basket::remove_item`] match the full product value and would keep
    /// the two on separate lines.
    pub fn contains(&self, product: &Product) -> bool {
        self.lines
            .iter()
            .any(|line| line.product.name == product.name)
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Subscribes to the line list. The receiver starts at the current
    /// value.
    pub fn watch_items(&self) -> watch::Receiver<Vec<BasketLine>> {
        self.items_tx.subscribe()
    }

    /// Subscribes to the running total. The receiver starts at the current
    /// value.
    pub fn watch_total(&self) -> watch::Receiver<f64> {
        self.total_tx.subscribe()
    }

    // Items first, then the total derived from them.
    fn publish(&self) {
        self.items_tx.send_replace(self.lines.clone());
        self.total_tx.send_replace(self.total());
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}
