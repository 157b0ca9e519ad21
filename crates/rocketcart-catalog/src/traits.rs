//! Catalog abstraction for product and stock lookups.

use std::sync::Arc;

use async_trait::async_trait;
use rocketcart_core::{Product, ProductId, StockInfo};

use crate::error::Result;

/// Read-only view of the remote product catalog.
///
/// Implementations must be thread-safe (Send + Sync). Both lookups may fail
/// for transport reasons; neither is retried by callers.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch the catalog record for a product.
    async fn get_product(&self, id: ProductId) -> Result<Product>;

    /// Fetch the units currently available for a product.
    async fn get_stock(&self, id: ProductId) -> Result<StockInfo>;
}

#[async_trait]
impl<C: ProductCatalog + ?Sized> ProductCatalog for Arc<C> {
    async fn get_product(&self, id: ProductId) -> Result<Product> {
        (**self).get_product(id).await
    }

    async fn get_stock(&self, id: ProductId) -> Result<StockInfo> {
        (**self).get_stock(id).await
    }
}
