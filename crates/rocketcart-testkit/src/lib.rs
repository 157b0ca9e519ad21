//! # RocketCart Testkit
//!
//! Testing utilities for RocketCart.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Snapshot vectors**: Known carts with their exact persisted JSON, so the
//!   snapshot format stays compatible with what the storefront already stored
//! - **Generators**: Proptest strategies for products, carts, and operation
//!   sequences
//! - **Fixtures**: A cart store wired to in-memory collaborators
//!
//! ## Snapshot Vectors
//!
//! ```rust
//! use rocketcart_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for vector in all_vectors() {
//!     println!("{}: {}", vector.name, vector.snapshot);
//! }
//! assert!(verify_all_vectors().is_ok());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use rocketcart_testkit::generators::{cart_ops, stock_levels};
//!
//! proptest! {
//!     #[test]
//!     fn cart_never_exceeds_stock(stock in stock_levels(), ops in cart_ops(32)) {
//!         // drive a fixture store with `ops` ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use rocketcart_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new().with_product(1, 5);
//! let store = fixture.open_store().unwrap();
//! assert!(store.cart().is_empty());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{line_item, sample_product, FixtureStore, TestFixture};
pub use generators::{apply_op, CartOp};
pub use vectors::{all_vectors, verify_all_vectors, SnapshotVector};
