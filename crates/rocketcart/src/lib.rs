//! # RocketCart
//!
//! The unified API for storefront cart state: add, remove, and re-quantify
//! products with fresh stock checks and write-through persistence.
//!
//! ## Overview
//!
//! A [`CartStore`] holds the ordered list of line items and three
//! collaborators:
//!
//! - **Catalog**: product details and authoritative stock ([`catalog`])
//! - **Storage**: a single slot mirroring the cart as a JSON snapshot ([`storage`])
//! - **Notifier**: user-facing error messages ([`notify`])
//!
//! ## Key Concepts
//!
//! - **Merge-or-insert**: adding a product already in the cart increments it
//!   in place; a new product is appended.
//! - **Stock check**: every quantity change is validated against stock
//!   fetched for that operation, never a cached value.
//! - **Write-through**: the snapshot is written before the in-memory cart
//!   changes; a failed write leaves both untouched.
//! - **One notification per failure**: stock shortages get their own
//!   message, everything else a generic message per operation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rocketcart::{CartConfig, CartStore, TracingNotifier, UpdateProductAmount};
//! use rocketcart::catalog::{CatalogConfig, HttpCatalog};
//! use rocketcart::core::ProductId;
//! use rocketcart::storage::SqliteStorage;
//!
//! async fn example() {
//!     let catalog = HttpCatalog::new(CatalogConfig::default());
//!     let storage = SqliteStorage::open("cart.db").unwrap();
//!
//!     let mut store =
//!         CartStore::open(catalog, storage, TracingNotifier, CartConfig::default()).unwrap();
//!
//!     store.add_product(ProductId::new(1)).await.ok();
//!     store
//!         .update_product_amount(UpdateProductAmount {
//!             product_id: ProductId::new(1),
//!             amount: 3,
//!         })
//!         .await
//!         .ok();
//!
//!     println!("{} products, total {:.2}", store.cart().len(), store.state().total());
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `rocketcart::core` - Data model and reconciliation rules
//! - `rocketcart::storage` - Snapshot storage backends
//! - `rocketcart::catalog` - Catalog clients

pub mod error;
pub mod notify;
pub mod store;

// Re-export component crates
pub use rocketcart_catalog as catalog;
pub use rocketcart_core as core;
pub use rocketcart_storage as storage;

// Re-export main types for convenience
pub use error::{CartError, CartOperation, Result};
pub use notify::{Notifier, NullNotifier, RecordingNotifier, TracingNotifier};
pub use store::{
    CartConfig, CartStore, CorruptSnapshotPolicy, UpdateProductAmount, DEFAULT_STORAGE_KEY,
};

// Re-export commonly used core types
pub use rocketcart_core::{Cart, LineItem, Product, ProductId, StockInfo};
