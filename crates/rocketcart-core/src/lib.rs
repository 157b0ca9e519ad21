//! # RocketCart Core
//!
//! Pure primitives for RocketCart: products, stock, line items, and the
//! cart reconciliation rules.
//!
//! This crate contains no I/O, no storage, no networking. Every mutation
//! is computed as a new [`Cart`] value; callers decide whether to commit it.
//!
//! ## Key Types
//!
//! - [`ProductId`] - Identifier of a catalog product
//! - [`Product`] - Catalog record (name, price, image)
//! - [`StockInfo`] - Authoritative available quantity for a product
//! - [`LineItem`] - A product plus its quantity in the cart
//! - [`Cart`] - Ordered sequence of line items, at most one per product
//!
//! ## Snapshots
//!
//! A cart persists as a JSON array of line items. See [`Cart::from_snapshot`]
//! and [`Cart::to_snapshot`].

pub mod cart;
pub mod error;
pub mod product;
pub mod types;
pub mod validation;

pub use cart::Cart;
pub use error::{CoreError, ReconcileError, ValidationError};
pub use product::{LineItem, Product, StockInfo};
pub use types::ProductId;
pub use validation::{requested_amount, validate_items};
