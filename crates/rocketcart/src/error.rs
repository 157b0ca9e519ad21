//! Error types for cart operations.

use rocketcart_catalog::CatalogError;
use rocketcart_core::{CoreError, ProductId, ReconcileError};
use rocketcart_storage::StorageError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Every failed operation also fires exactly one user-facing notification;
/// see [`CartError::notification`].
#[derive(Debug, Error)]
pub enum CartError {
    /// The product (in the catalog) or line item (in the cart) is missing.
    #[error("not found: product {0}")]
    NotFound(ProductId),

    /// The requested quantity exceeds available stock.
    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    StockInsufficient {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    /// The requested quantity is not a positive amount.
    #[error("invalid amount: {0}")]
    InvalidInput(i64),

    /// The catalog could not be reached or answered garbage.
    #[error("catalog error: {0}")]
    Transient(CatalogError),

    /// Persisting the snapshot failed; the cart was left unchanged.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted snapshot could not be decoded.
    #[error("corrupt cart snapshot: {0}")]
    CorruptSnapshot(#[source] CoreError),

    /// Encoding the snapshot failed.
    #[error("snapshot error: {0}")]
    Snapshot(#[source] CoreError),
}

impl CartError {
    /// The message shown to the user when `operation` fails with this error.
    pub fn notification(&self, operation: CartOperation) -> &'static str {
        match self {
            CartError::StockInsufficient { .. } => crate::notify::OUT_OF_STOCK,
            _ => operation.failure_message(),
        }
    }
}

impl From<ReconcileError> for CartError {
    fn from(e: ReconcileError) -> Self {
        match e {
            ReconcileError::NotInCart(id) => CartError::NotFound(id),
            ReconcileError::OutOfStock {
                product_id,
                requested,
                available,
            } => CartError::StockInsufficient {
                product_id,
                requested,
                available,
            },
            ReconcileError::InvalidAmount(amount) => CartError::InvalidInput(amount),
        }
    }
}

impl From<CatalogError> for CartError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => CartError::NotFound(id),
            other => CartError::Transient(other),
        }
    }
}

/// The three mutating cart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    /// Generic failure message for this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::Add => crate::notify::ADD_FAILED,
            CartOperation::Remove => crate::notify::REMOVE_FAILED,
            CartOperation::UpdateAmount => crate::notify::UPDATE_FAILED,
        }
    }
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify;

    #[test]
    fn test_stock_shortage_has_its_own_message() {
        let err = CartError::StockInsufficient {
            product_id: ProductId(1),
            requested: 2,
            available: 1,
        };
        for op in [CartOperation::Add, CartOperation::UpdateAmount] {
            assert_eq!(err.notification(op), notify::OUT_OF_STOCK);
        }
    }

    #[test]
    fn test_other_errors_collapse_per_operation() {
        let err = CartError::InvalidInput(0);
        assert_eq!(err.notification(CartOperation::Add), notify::ADD_FAILED);
        assert_eq!(err.notification(CartOperation::Remove), notify::REMOVE_FAILED);
        assert_eq!(
            err.notification(CartOperation::UpdateAmount),
            notify::UPDATE_FAILED
        );

        let err = CartError::from(CatalogError::Network("reset".into()));
        assert!(matches!(err, CartError::Transient(_)));
        assert_eq!(err.notification(CartOperation::Add), notify::ADD_FAILED);
    }

    #[test]
    fn test_catalog_not_found_maps_to_not_found() {
        let err = CartError::from(CatalogError::NotFound(ProductId(3)));
        assert!(matches!(err, CartError::NotFound(ProductId(3))));
    }

    #[test]
    fn test_reconcile_errors_map_one_to_one() {
        assert!(matches!(
            CartError::from(ReconcileError::NotInCart(ProductId(2))),
            CartError::NotFound(ProductId(2))
        ));
        assert!(matches!(
            CartError::from(ReconcileError::InvalidAmount(-1)),
            CartError::InvalidInput(-1)
        ));
    }
}
