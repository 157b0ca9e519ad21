//! # RocketCart Catalog
//!
//! Access to the remote product and stock API.
//!
//! ## Overview
//!
//! The cart never trusts its own idea of availability: every quantity change
//! fetches fresh stock through the [`ProductCatalog`] trait. Implementations
//! may talk HTTP, gRPC, or serve fixtures from memory.
//!
//! ## Key Types
//!
//! - [`ProductCatalog`] - The async trait for product and stock lookups
//! - [`HttpCatalog`] - JSON REST client (`/products/{id}`, `/stock/{id}`)
//! - [`MemoryCatalog`] - In-memory catalog with failure injection for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rocketcart_catalog::{CatalogConfig, HttpCatalog, ProductCatalog};
//! use rocketcart_core::ProductId;
//!
//! async fn example() {
//!     let catalog = HttpCatalog::new(CatalogConfig::default());
//!     let stock = catalog.get_stock(ProductId::new(1)).await.unwrap();
//!     println!("{} in stock", stock.amount);
//! }
//! ```

pub mod error;
pub mod http;
pub mod memory;
pub mod traits;

pub use error::{CatalogError, Result};
pub use http::{CatalogConfig, HttpCatalog};
pub use memory::MemoryCatalog;
pub use traits::ProductCatalog;
