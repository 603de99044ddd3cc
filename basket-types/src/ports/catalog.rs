//! Product catalog source port.

use crate::domain::Product;
use crate::error::CatalogError;

/// Port trait for loading the product catalog.
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync + 'static {
    /// Loads the catalog. Fetched once per session; no caching required.
    async fn load(&self) -> Result<Vec<Product>, CatalogError>;
}
