//! Error types for RocketCart Core.

use thiserror::Error;

use crate::types::ProductId;

/// Errors raised while encoding or decoding cart snapshots.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] ValidationError),
}

/// Structural problems found in a decoded list of line items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate line item for product {0}")]
    DuplicateItem(ProductId),

    #[error("line item for product {0} has amount 0")]
    ZeroAmount(ProductId),
}

/// Reasons a requested cart change is rejected.
///
/// These never leave the cart modified: every reconciliation step computes
/// a new cart and only returns it on success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
}
