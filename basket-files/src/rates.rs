//! File-backed exchange-rate source.

use std::path::PathBuf;

use async_trait::async_trait;

use basket_types::{RateSnapshot, RateSource, RatesError};

/// Loads the exchange-rate snapshot from a JSON file.
///
/// Unreadable files surface as [`RatesError::DataLoading`], undecodable
/// payloads as [`RatesError::Parsing`]. A payload whose own `success` flag
/// is false is treated as a load failure: the upstream snapshot declares
/// that it carries no usable rates.
pub struct FileRateSource {
    path: PathBuf,
}

impl FileRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RateSource for FileRateSource {
    async fn load(&self) -> Result<RateSnapshot, RatesError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RatesError::DataLoading(format!("{}: {e}", self.path.display())))?;

        let snapshot: RateSnapshot = serde_json::from_slice(&bytes)
            .map_err(|e| RatesError::Parsing(format!("{}: {e}", self.path.display())))?;

        if !snapshot.success {
            return Err(RatesError::DataLoading(format!(
                "{}: snapshot is marked unsuccessful",
                self.path.display()
            )));
        }

        tracing::info!(
            path = %self.path.display(),
            base = %snapshot.base,
            quotes = snapshot.quotes.len(),
            "loaded exchange rates"
        );
        Ok(snapshot)
    }
}
