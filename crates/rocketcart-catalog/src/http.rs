//! HTTP implementation of the ProductCatalog trait.
//!
//! Talks to a JSON REST API exposing:
//!
//! ```text
//! GET {base_url}/products/{id}  -> {"id":1,"name":"...","price":179.9,"imageUrl":"..."}
//! GET {base_url}/stock/{id}     -> {"id":1,"amount":3}
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use rocketcart_core::{Product, ProductId, StockInfo};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::traits::ProductCatalog;

/// Configuration for the HTTP catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root URL of the catalog API.
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Point the catalog at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Catalog client over HTTP.
pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Create a client with a default connection pool.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base(), id)
    }

    fn stock_url(&self, id: ProductId) -> String {
        format!("{}/stock/{}", self.base(), id)
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn fetch<T: DeserializeOwned>(&self, id: ProductId, url: String) -> Result<T> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn get_product(&self, id: ProductId) -> Result<Product> {
        let url = self.product_url(id);
        self.fetch(id, url).await
    }

    async fn get_stock(&self, id: ProductId) -> Result<StockInfo> {
        let url = self.stock_url(id);
        self.fetch(id, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let catalog = HttpCatalog::new(CatalogConfig::default());
        assert_eq!(
            catalog.product_url(ProductId(4)),
            "http://localhost:3333/products/4"
        );
        assert_eq!(catalog.stock_url(ProductId(4)), "http://localhost:3333/stock/4");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = CatalogConfig::default().with_base_url("https://api.example.com/v1/");
        let catalog = HttpCatalog::new(config);
        assert_eq!(
            catalog.stock_url(ProductId(12)),
            "https://api.example.com/v1/stock/12"
        );
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_network_error() {
        // Port 9 (discard) on loopback is not expected to run an HTTP server.
        let config = CatalogConfig::default().with_base_url("http://127.0.0.1:9");
        let catalog = HttpCatalog::new(config);

        let err = catalog.get_stock(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)));
    }
}
