//! Catalog source contract.

use async_trait::async_trait;
use thiserror::Error;

use shophub_catalog::{Category, LoadFailure, Product};

/// Why a fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body was not the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<FetchError> for LoadFailure {
    fn from(err: FetchError) -> Self {
        LoadFailure::new(err.to_string())
    }
}

/// Where catalogs come from.
///
/// The production implementation is [`crate::HttpCatalogSource`]; tests
/// substitute canned sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product catalog.
    ///
    /// No pagination: the storefront holds the whole catalog in memory for
    /// the session.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the category names for the filter widget.
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_convert_to_customer_facing_failures() {
        let failure = LoadFailure::from(FetchError::Api {
            status: 503,
            body: "maintenance".to_string(),
        });
        assert_eq!(failure.message(), "API error (503): maintenance");

        let failure = LoadFailure::from(FetchError::Network("connection refused".to_string()));
        assert_eq!(failure.message(), "network error: connection refused");
    }
}
