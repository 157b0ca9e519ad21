//! # RocketCart Storage
//!
//! Storage abstraction for RocketCart. Provides a trait-based interface
//! for persisting cart snapshots, with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The cart is mirrored into local storage as a single serialized blob under
//! a fixed key. The [`Storage`] trait captures exactly that: a synchronous
//! string-keyed slot that can be read, overwritten, or cleared.
//!
//! ## Key Types
//!
//! - [`Storage`] - The trait for all storage operations
//! - [`SqliteStorage`] - SQLite-based persistent storage
//! - [`MemoryStorage`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rocketcart_storage::{SqliteStorage, Storage};
//!
//! let storage = SqliteStorage::open("cart.db").unwrap();
//! storage.write("@RocketShoes:cart", "[]").unwrap();
//! assert_eq!(storage.read("@RocketShoes:cart").unwrap().as_deref(), Some("[]"));
//! ```
//!
//! ## Design Notes
//!
//! - **Last writer wins**: a write replaces the whole value for the key
//! - **Synchronous**: no operation suspends; callers never hold a partially
//!   written value

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StorageError};
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::Storage;
