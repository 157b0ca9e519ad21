//! Proptest generators for property-based testing.

use std::collections::BTreeMap;

use proptest::prelude::*;

use rocketcart::{CartStore, Notifier, Result, UpdateProductAmount};
use rocketcart_catalog::ProductCatalog;
use rocketcart_core::{LineItem, ProductId};
use rocketcart_storage::Storage;

use crate::fixtures::line_item;

/// Highest product id the generators produce. Kept small so operation
/// sequences hit the same products repeatedly.
pub const MAX_PRODUCT_ID: u64 = 6;

/// A mutating cart operation, as a UI would issue it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Remove(ProductId),
    Update(ProductId, i64),
}

/// Run one operation against a store.
pub async fn apply_op<C, S, N>(store: &mut CartStore<C, S, N>, op: CartOp) -> Result<LineItem>
where
    C: ProductCatalog,
    S: Storage,
    N: Notifier,
{
    match op {
        CartOp::Add(id) => store.add_product(id).await,
        CartOp::Remove(id) => store.remove_product(id),
        CartOp::Update(id, amount) => {
            store
                .update_product_amount(UpdateProductAmount {
                    product_id: id,
                    amount,
                })
                .await
        }
    }
}

/// Generate a product id in `1..=MAX_PRODUCT_ID`.
pub fn product_id() -> impl Strategy<Value = ProductId> {
    (1..=MAX_PRODUCT_ID).prop_map(ProductId)
}

/// Generate a requested amount, including zero and negatives.
pub fn requested_amount() -> impl Strategy<Value = i64> {
    prop_oneof![
        3 => 1i64..=8,
        1 => -3i64..=0,
    ]
}

/// Generate a single cart operation.
pub fn cart_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        3 => product_id().prop_map(CartOp::Add),
        1 => product_id().prop_map(CartOp::Remove),
        2 => (product_id(), requested_amount()).prop_map(|(id, n)| CartOp::Update(id, n)),
    ]
}

/// Generate a sequence of up to `max_len` operations.
pub fn cart_ops(max_len: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(cart_op(), 0..=max_len)
}

/// Generate stock levels for every product id, zero included.
pub fn stock_levels() -> impl Strategy<Value = BTreeMap<u64, u32>> {
    prop::collection::vec(0u32..=5, MAX_PRODUCT_ID as usize).prop_map(|levels| {
        levels
            .into_iter()
            .enumerate()
            .map(|(i, amount)| (i as u64 + 1, amount))
            .collect()
    })
}

/// Generate a valid cart: distinct ids in random order, amounts >= 1.
pub fn cart_items() -> impl Strategy<Value = Vec<LineItem>> {
    (
        prop::sample::subsequence((1..=MAX_PRODUCT_ID).collect::<Vec<_>>(), 0..=3).prop_shuffle(),
        prop::collection::vec(1u32..=4, 3),
    )
        .prop_map(|(ids, amounts)| {
            ids.into_iter()
                .zip(amounts)
                .map(|(id, amount)| line_item(id, amount))
                .collect()
        })
}
