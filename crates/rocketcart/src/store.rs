//! The CartStore: storefront cart state with stock checks and write-through
//! persistence.
//!
//! The store owns the in-memory cart, a catalog for product and stock
//! lookups, a storage slot mirroring the cart, and a notifier for
//! user-facing errors.

use rocketcart_catalog::ProductCatalog;
use rocketcart_core::{requested_amount, Cart, LineItem, ProductId};
use rocketcart_storage::Storage;
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartOperation, Result};
use crate::notify::{Notifier, TracingNotifier};

/// Storage key used by the storefront for the cart snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// What to do when the persisted snapshot cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptSnapshotPolicy {
    /// Log a warning and start with an empty cart. The stored blob is
    /// overwritten by the next successful mutation.
    #[default]
    Reset,
    /// Refuse to open the store.
    Fail,
}

/// Configuration for the CartStore.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key of the persisted snapshot.
    pub storage_key: String,
    /// Handling of undecodable snapshots at open.
    pub on_corrupt_snapshot: CorruptSnapshotPolicy,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            on_corrupt_snapshot: CorruptSnapshotPolicy::default(),
        }
    }
}

impl CartConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_corrupt_snapshot_policy(mut self, policy: CorruptSnapshotPolicy) -> Self {
        self.on_corrupt_snapshot = policy;
        self
    }
}

/// Request to set the quantity of a product already in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    /// Target quantity. Anything below 1 is rejected without a stock lookup.
    pub amount: i64,
}

/// The cart store.
///
/// Provides:
/// - Reading the current cart
/// - Adding one unit of a product (stock-checked)
/// - Removing a product
/// - Setting a product's quantity (stock-checked)
///
/// Mutations take `&mut self`, so a store has a single writer. Sharing one
/// across tasks means wrapping it in a queueing primitive such as
/// `tokio::sync::Mutex`, which runs operations one after another.
pub struct CartStore<C, S, N = TracingNotifier>
where
    C: ProductCatalog,
    S: Storage,
    N: Notifier,
{
    /// Product and stock lookups.
    catalog: C,
    /// Snapshot persistence.
    storage: S,
    /// User-facing error sink.
    notifier: N,
    /// Configuration.
    config: CartConfig,
    /// Current cart, always equal to the last persisted snapshot.
    cart: Cart,
}

impl<C, S, N> CartStore<C, S, N>
where
    C: ProductCatalog,
    S: Storage,
    N: Notifier,
{
    /// Open a store, loading the cart persisted under the configured key.
    ///
    /// A missing snapshot yields an empty cart. A corrupt one is handled per
    /// [`CartConfig::on_corrupt_snapshot`]. Storage read failures are
    /// returned as-is.
    pub fn open(catalog: C, storage: S, notifier: N, config: CartConfig) -> Result<Self> {
        let cart = load_cart(&storage, &config)?;

        tracing::debug!(
            key = %config.storage_key,
            items = cart.len(),
            "opened cart store"
        );

        Ok(Self {
            catalog,
            storage,
            notifier,
            config,
            cart,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Current line items in insertion order.
    pub fn cart(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Current cart with its query helpers.
    pub fn state(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add one unit of a product.
    ///
    /// Product details and stock are fetched concurrently. A product already
    /// in the cart is incremented in place; a new one is appended with
    /// amount 1. Returns the committed line item.
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<LineItem> {
        let result = self.try_add_product(product_id).await;
        self.report(CartOperation::Add, product_id, result)
    }

    /// Remove a product from the cart. Never touches the catalog.
    ///
    /// Returns the removed line item.
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<LineItem> {
        let result = self.try_remove_product(product_id);
        self.report(CartOperation::Remove, product_id, result)
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// Amounts below 1 are rejected before any stock lookup. Returns the
    /// updated line item.
    pub async fn update_product_amount(
        &mut self,
        request: UpdateProductAmount,
    ) -> Result<LineItem> {
        let result = self.try_update_product_amount(request).await;
        self.report(CartOperation::UpdateAmount, request.product_id, result)
    }

    async fn try_add_product(&mut self, product_id: ProductId) -> Result<LineItem> {
        let (product, stock) = tokio::try_join!(
            self.catalog.get_product(product_id),
            self.catalog.get_stock(product_id)
        )?;

        let (next, item) = self.cart.with_added(product, &stock)?;
        self.commit(next)?;
        Ok(item)
    }

    fn try_remove_product(&mut self, product_id: ProductId) -> Result<LineItem> {
        let (next, removed) = self.cart.with_removed(product_id)?;
        self.commit(next)?;
        Ok(removed)
    }

    async fn try_update_product_amount(
        &mut self,
        request: UpdateProductAmount,
    ) -> Result<LineItem> {
        let amount = requested_amount(request.amount)?;
        let stock = self.catalog.get_stock(request.product_id).await?;

        let (next, item) = self.cart.with_amount(request.product_id, amount, &stock)?;
        self.commit(next)?;
        Ok(item)
    }

    /// Persist `next`, then make it the current cart.
    ///
    /// If the write fails the in-memory cart is left as it was, so memory
    /// and storage never disagree.
    fn commit(&mut self, next: Cart) -> Result<()> {
        let snapshot = next.to_snapshot().map_err(CartError::Snapshot)?;
        self.storage.write(&self.config.storage_key, &snapshot)?;
        self.cart = next;
        Ok(())
    }

    /// Turn a failed operation into exactly one notification.
    fn report<T>(
        &self,
        operation: CartOperation,
        product_id: ProductId,
        result: Result<T>,
    ) -> Result<T> {
        match &result {
            Ok(_) => {
                tracing::debug!(
                    ?operation,
                    %product_id,
                    items = self.cart.len(),
                    "cart updated"
                );
            }
            Err(e) => {
                tracing::warn!(?operation, %product_id, error = %e, "cart operation rejected");
                self.notifier.error(e.notification(operation));
            }
        }
        result
    }
}

/// Read and decode the persisted cart.
fn load_cart<S: Storage>(storage: &S, config: &CartConfig) -> Result<Cart> {
    let Some(snapshot) = storage.read(&config.storage_key)? else {
        return Ok(Cart::new());
    };

    match Cart::from_snapshot(&snapshot) {
        Ok(cart) => Ok(cart),
        Err(e) => match config.on_corrupt_snapshot {
            CorruptSnapshotPolicy::Reset => {
                tracing::warn!(
                    key = %config.storage_key,
                    error = %e,
                    "discarding corrupt cart snapshot"
                );
                Ok(Cart::new())
            }
            CorruptSnapshotPolicy::Fail => Err(CartError::CorruptSnapshot(e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{self, RecordingNotifier};
    use rocketcart_catalog::MemoryCatalog;
    use rocketcart_core::Product;
    use rocketcart_storage::MemoryStorage;
    use std::sync::Arc;

    type TestStore = CartStore<Arc<MemoryCatalog>, Arc<MemoryStorage>, RecordingNotifier>;

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Tênis {}", id),
            price: 99.9,
            image_url: format!("https://cdn.example.com/{}.jpg", id),
        }
    }

    fn open_store(catalog: Arc<MemoryCatalog>, storage: Arc<MemoryStorage>) -> TestStore {
        CartStore::open(
            catalog,
            storage,
            RecordingNotifier::new(),
            CartConfig::default(),
        )
        .unwrap()
    }

    fn persisted(store: &TestStore) -> Option<String> {
        store.storage().read(DEFAULT_STORAGE_KEY).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_increment() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.insert(product(1), 2);
        let mut store = open_store(catalog.clone(), Arc::new(MemoryStorage::new()));

        assert_eq!(store.add_product(ProductId(1)).await.unwrap().amount, 1);
        assert_eq!(store.add_product(ProductId(1)).await.unwrap().amount, 2);
        assert_eq!(store.cart().len(), 1);

        // Both endpoints hit on every add
        assert_eq!(catalog.product_requests(), 2);
        assert_eq!(catalog.stock_requests(), 2);
        assert!(store.notifier().messages().is_empty());
    }

    #[tokio::test]
    async fn test_add_beyond_stock_notifies() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.insert(product(1), 1);
        let mut store = open_store(catalog, Arc::new(MemoryStorage::new()));

        store.add_product(ProductId(1)).await.unwrap();
        let before = persisted(&store);

        let err = store.add_product(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, CartError::StockInsufficient { requested: 2, .. }));
        assert_eq!(store.cart()[0].amount, 1);
        assert_eq!(persisted(&store), before);
        assert_eq!(store.notifier().messages(), vec![notify::OUT_OF_STOCK]);
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.set_stock(ProductId(4), 10);
        let mut store = open_store(catalog, Arc::new(MemoryStorage::new()));

        let err = store.add_product(ProductId(4)).await.unwrap_err();
        assert!(matches!(err, CartError::NotFound(ProductId(4))));
        assert_eq!(store.notifier().messages(), vec![notify::ADD_FAILED]);
        assert_eq!(persisted(&store), None);
    }

    #[tokio::test]
    async fn test_remove_absent() {
        let mut store = open_store(
            Arc::new(MemoryCatalog::new()),
            Arc::new(MemoryStorage::new()),
        );

        let err = store.remove_product(ProductId(1)).unwrap_err();
        assert!(matches!(err, CartError::NotFound(ProductId(1))));
        assert_eq!(store.notifier().messages(), vec![notify::REMOVE_FAILED]);
        assert_eq!(store.storage().write_count(), 0);
    }

    #[tokio::test]
    async fn test_update_rejects_non_positive_without_lookup() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.insert(product(1), 5);
        let mut store = open_store(catalog.clone(), Arc::new(MemoryStorage::new()));
        store.add_product(ProductId(1)).await.unwrap();
        let lookups = catalog.stock_requests();

        for amount in [0, -1, i64::MIN] {
            let err = store
                .update_product_amount(UpdateProductAmount {
                    product_id: ProductId(1),
                    amount,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, CartError::InvalidInput(_)));
        }

        assert_eq!(catalog.stock_requests(), lookups);
        assert_eq!(store.cart()[0].amount, 1);
        assert_eq!(store.notifier().messages().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_cart_unchanged() {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog.insert(product(1), 5);
        let storage = Arc::new(MemoryStorage::new());
        let mut store = open_store(catalog, storage.clone());

        storage.set_reject_writes(true);
        let err = store.add_product(ProductId(1)).await.unwrap_err();

        assert!(matches!(err, CartError::Storage(_)));
        assert!(store.cart().is_empty());
        assert_eq!(store.notifier().messages(), vec![notify::ADD_FAILED]);
    }

    #[test]
    fn test_open_missing_snapshot_is_empty() {
        let store = open_store(
            Arc::new(MemoryCatalog::new()),
            Arc::new(MemoryStorage::new()),
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_open_corrupt_snapshot_policies() {
        let storage = Arc::new(MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "not json"));

        let store = open_store(Arc::new(MemoryCatalog::new()), storage.clone());
        assert!(store.cart().is_empty());

        let result = CartStore::open(
            Arc::new(MemoryCatalog::new()),
            storage,
            RecordingNotifier::new(),
            CartConfig::default().with_corrupt_snapshot_policy(CorruptSnapshotPolicy::Fail),
        );
        assert!(matches!(result, Err(CartError::CorruptSnapshot(_))));
    }

    #[test]
    fn test_custom_storage_key() {
        let snapshot = r#"[{"id":2,"name":"x","price":10.0,"imageUrl":"","amount":3}]"#;
        let storage = Arc::new(MemoryStorage::with_entry("shop:cart", snapshot));

        let store = CartStore::open(
            Arc::new(MemoryCatalog::new()),
            storage,
            RecordingNotifier::new(),
            CartConfig::default().with_storage_key("shop:cart"),
        )
        .unwrap();

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.state().amounts().get(&ProductId(2)), Some(&3));
    }

    #[test]
    fn test_update_request_wire_format() {
        let request: UpdateProductAmount =
            serde_json::from_str(r#"{"productId":3,"amount":-2}"#).unwrap();
        assert_eq!(request.product_id, ProductId(3));
        assert_eq!(request.amount, -2);
    }
}
