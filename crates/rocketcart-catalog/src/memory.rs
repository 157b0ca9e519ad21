//! In-memory implementation of the ProductCatalog trait.
//!
//! Serves products and stock from maps. Tests can flip the catalog offline,
//! change stock between calls, and count how often each endpoint was hit.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use rocketcart_core::{Product, ProductId, StockInfo};

use crate::error::{CatalogError, Result};
use crate::traits::ProductCatalog;

/// In-memory catalog.
pub struct MemoryCatalog {
    inner: RwLock<MemoryCatalogInner>,
    offline: AtomicBool,
    product_requests: AtomicUsize,
    stock_requests: AtomicUsize,
}

#[derive(Default)]
struct MemoryCatalogInner {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, u32>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryCatalogInner::default()),
            offline: AtomicBool::new(false),
            product_requests: AtomicUsize::new(0),
            stock_requests: AtomicUsize::new(0),
        }
    }

    /// Register a product with its available stock.
    pub fn insert(&self, product: Product, stock: u32) {
        if let Ok(mut inner) = self.inner.write() {
            inner.stock.insert(product.id, stock);
            inner.products.insert(product.id, product);
        }
    }

    /// Change the stock of a product. Products without a catalog record
    /// still get a stock entry, mirroring a catalog whose two endpoints are
    /// backed by separate tables.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        if let Ok(mut inner) = self.inner.write() {
            inner.stock.insert(id, amount);
        }
    }

    /// Make every request fail with `Unavailable` until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of `get_product` calls received.
    pub fn product_requests(&self) -> usize {
        self.product_requests.load(Ordering::SeqCst)
    }

    /// Number of `get_stock` calls received.
    pub fn stock_requests(&self) -> usize {
        self.stock_requests.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CatalogError::Unavailable("catalog is offline".into()));
        }
        Ok(())
    }

    fn read_inner<T>(&self, f: impl FnOnce(&MemoryCatalogInner) -> Result<T>) -> Result<T> {
        let inner = self
            .inner
            .read()
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        f(&inner)
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCatalog for MemoryCatalog {
    async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.product_requests.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        self.read_inner(|inner| {
            inner
                .products
                .get(&id)
                .cloned()
                .ok_or(CatalogError::NotFound(id))
        })
    }

    async fn get_stock(&self, id: ProductId) -> Result<StockInfo> {
        self.stock_requests.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        self.read_inner(|inner| {
            inner
                .stock
                .get(&id)
                .map(|&amount| StockInfo { id, amount })
                .ok_or(CatalogError::NotFound(id))
        })
    }
}
