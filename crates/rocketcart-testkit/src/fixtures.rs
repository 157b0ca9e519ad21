//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use rocketcart::{CartConfig, CartStore, RecordingNotifier, Result};
use rocketcart_catalog::MemoryCatalog;
use rocketcart_core::{Cart, LineItem, Product, ProductId};
use rocketcart_storage::{MemoryStorage, Storage};

/// A store wired to the fixture's collaborators.
pub type FixtureStore = CartStore<Arc<MemoryCatalog>, Arc<MemoryStorage>, RecordingNotifier>;

/// A deterministic catalog product for `id`.
pub fn sample_product(id: u64) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Tênis Modelo {}", id),
        price: 59.9 + 20.0 * id as f64,
        image_url: format!("https://cdn.rocketshoes.example/products/{}.jpg", id),
    }
}

/// A line item for `sample_product(id)`.
pub fn line_item(id: u64, amount: u32) -> LineItem {
    LineItem::from_product(sample_product(id), amount)
}

/// A test fixture with an in-memory catalog, storage and notifier.
///
/// Clones share collaborators, so several stores opened from one fixture
/// see the same persisted snapshot.
#[derive(Clone)]
pub struct TestFixture {
    pub catalog: Arc<MemoryCatalog>,
    pub storage: Arc<MemoryStorage>,
    pub notifier: RecordingNotifier,
    pub config: CartConfig,
}

impl TestFixture {
    /// Empty catalog, empty storage.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(MemoryCatalog::new()),
            storage: Arc::new(MemoryStorage::new()),
            notifier: RecordingNotifier::new(),
            config: CartConfig::default(),
        }
    }

    /// Register `sample_product(id)` with `stock` units.
    pub fn with_product(self, id: u64, stock: u32) -> Self {
        self.catalog.insert(sample_product(id), stock);
        self
    }

    /// Register several products as `(id, stock)` pairs.
    pub fn with_products(self, products: &[(u64, u32)]) -> Self {
        products
            .iter()
            .fold(self, |fixture, &(id, stock)| fixture.with_product(id, stock))
    }

    /// Pre-seed storage with a cart of `(id, amount)` pairs.
    pub fn with_cart(self, items: &[(u64, u32)]) -> Self {
        let items: Vec<LineItem> = items
            .iter()
            .map(|&(id, amount)| line_item(id, amount))
            .collect();
        let snapshot = serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string());
        self.with_raw_snapshot(&snapshot)
    }

    /// Pre-seed storage with an arbitrary string.
    pub fn with_raw_snapshot(self, snapshot: &str) -> Self {
        // MemoryStorage only fails on poisoned locks or when told to
        let _ = self.storage.write(&self.config.storage_key, snapshot);
        self
    }

    /// Replace the store configuration.
    pub fn with_config(mut self, config: CartConfig) -> Self {
        self.config = config;
        self
    }

    /// Open a cart store over this fixture.
    pub fn open_store(&self) -> Result<FixtureStore> {
        CartStore::open(
            Arc::clone(&self.catalog),
            Arc::clone(&self.storage),
            self.notifier.clone(),
            self.config.clone(),
        )
    }

    /// The raw persisted snapshot, if any.
    pub fn persisted(&self) -> Option<String> {
        self.storage.read(&self.config.storage_key).ok().flatten()
    }

    /// The persisted snapshot decoded as a cart.
    pub fn persisted_cart(&self) -> Option<Cart> {
        self.persisted()
            .and_then(|snapshot| Cart::from_snapshot(&snapshot).ok())
    }

    /// Notifications received so far.
    pub fn notifications(&self) -> Vec<String> {
        self.notifier.messages()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
