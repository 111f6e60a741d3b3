//! HTTP catalog source with exponential backoff retry.

use std::time::Duration;

use async_trait::async_trait;

use shophub_catalog::{Category, Product};

use crate::source::{CatalogSource, FetchError};

const DEFAULT_MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(250);

/// Catalog source backed by the remote storefront API.
///
/// `GET {base}/products` returns the full product array and
/// `GET {base}/products/categories` the category names. Transient failures
/// (network errors and 5xx responses) are retried with exponential backoff;
/// 4xx responses fail fast.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    base_url: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slashes(base_url.into()),
            client: reqwest::Client::new(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Number of retries after the initial attempt; zero disables retry.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut delay = INITIAL_BACKOFF;

        for attempt in 0..=self.max_retries {
            // GET with no body: rebuilding the request is cheaper than
            // cloning it across attempts.
            match self.client.get(&url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<T>().await.map_err(|e| {
                            FetchError::Decode(format!("unexpected body from {url}: {e}"))
                        });
                    }

                    let body = resp.text().await.unwrap_or_default();
                    if status.is_server_error() && attempt < self.max_retries {
                        tracing::warn!(
                            "GET {} failed with {} on attempt {}, retrying...",
                            url,
                            status,
                            attempt + 1
                        );
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                    } else {
                        return Err(FetchError::Api {
                            status: status.as_u16(),
                            body,
                        });
                    }
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        tracing::warn!(
                            "GET {} network error on attempt {}: {}, retrying...",
                            url,
                            attempt + 1,
                            e
                        );
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                    } else {
                        return Err(FetchError::Network(e.to_string()));
                    }
                }
            }
        }

        Err(FetchError::Network("max retries exceeded".to_string()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("/products").await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json("/products/categories").await
    }
}

fn trim_trailing_slashes(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
