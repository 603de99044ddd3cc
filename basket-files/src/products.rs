//! File-backed product catalog source.

use std::path::PathBuf;

use async_trait::async_trait;

use basket_types::{CatalogError, Product, ProductSource};

/// Loads the product catalog from a JSON file.
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for FileProductSource {
    async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::DataLoading(format!("{}: {e}", self.path.display())))?;

        let products: Vec<Product> = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Parsing(format!("{}: {e}", self.path.display())))?;

        tracing::info!(
            path = %self.path.display(),
            products = products.len(),
            "loaded product catalog"
        );
        Ok(products)
    }
}
