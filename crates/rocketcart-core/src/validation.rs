//! Validation of line-item lists and requested quantities.
//!
//! A list of line items is a valid cart if:
//! 1. No two items share a product id
//! 2. Every item has an amount of at least 1

use std::collections::HashSet;

use crate::error::{ReconcileError, ValidationError};
use crate::product::LineItem;

/// Check the cart invariants over a list of line items.
pub fn validate_items(items: &[LineItem]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if !seen.insert(item.id) {
            return Err(ValidationError::DuplicateItem(item.id));
        }
        if item.amount == 0 {
            return Err(ValidationError::ZeroAmount(item.id));
        }
    }

    Ok(())
}

/// Validate a caller-supplied target quantity.
///
/// Rejects anything below 1 and anything that does not fit a line item.
pub fn requested_amount(amount: i64) -> Result<u32, ReconcileError> {
    if amount < 1 {
        return Err(ReconcileError::InvalidAmount(amount));
    }
    u32::try_from(amount).map_err(|_| ReconcileError::InvalidAmount(amount))
}
