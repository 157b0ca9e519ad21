//! The cart: an ordered list of line items and its reconciliation rules.
//!
//! Every change is computed as a new `Cart` plus the affected item. The
//! original cart is never touched, so a rejected change has no effect and a
//! caller can persist the new cart before committing it.

use std::collections::BTreeMap;

use crate::error::{CoreError, ReconcileError};
use crate::product::{LineItem, Product, StockInfo};
use crate::types::ProductId;
use crate::validation::validate_items;

/// Ordered sequence of line items, at most one per product id.
///
/// Items keep their insertion order; quantity changes happen in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing items, checking the cart invariants.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CoreError> {
        validate_items(&items)?;
        Ok(Self { items })
    }

    /// Decode a persisted snapshot (a JSON array of line items).
    pub fn from_snapshot(snapshot: &str) -> Result<Self, CoreError> {
        let items: Vec<LineItem> = serde_json::from_str(snapshot)
            .map_err(|e| CoreError::DecodingError(e.to_string()))?;
        Self::from_items(items)
    }

    /// Encode the cart as a snapshot.
    pub fn to_snapshot(&self) -> Result<String, CoreError> {
        serde_json::to_string(&self.items).map_err(|e| CoreError::EncodingError(e.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item for `id`, if present.
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// The item for `id`, if present.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Quantity held for every product in the cart.
    pub fn amounts(&self) -> BTreeMap<ProductId, u32> {
        self.items.iter().map(|item| (item.id, item.amount)).collect()
    }

    /// Sum of all item subtotals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reconciliation
    // ─────────────────────────────────────────────────────────────────────────

    /// Add one unit of `product`.
    ///
    /// An item already in the cart is incremented in place, keeping its
    /// stored name, price and image. A new item is appended with amount 1.
    /// Rejected when the resulting amount exceeds `stock`.
    pub fn with_added(
        &self,
        product: Product,
        stock: &StockInfo,
    ) -> Result<(Cart, LineItem), ReconcileError> {
        let product_id = product.id;
        let position = self.position(product_id);

        let requested = match position {
            Some(index) => u64::from(self.items[index].amount) + 1,
            None => 1,
        };

        if !stock.covers(requested) {
            return Err(ReconcileError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        // requested <= stock.amount, so it fits in u32
        let amount = requested as u32;
        let mut items = self.items.clone();
        let item = match position {
            Some(index) => {
                let item = items[index].with_amount(amount);
                items[index] = item.clone();
                item
            }
            None => {
                let item = LineItem::from_product(product, amount);
                items.push(item.clone());
                item
            }
        };

        Ok((Cart { items }, item))
    }

    /// Remove the item for `id`.
    pub fn with_removed(&self, id: ProductId) -> Result<(Cart, LineItem), ReconcileError> {
        let index = self.position(id).ok_or(ReconcileError::NotInCart(id))?;

        let mut items = self.items.clone();
        let removed = items.remove(index);

        Ok((Cart { items }, removed))
    }

    /// Set the amount of the item for `id`, keeping its position.
    ///
    /// Stock is checked before the item is looked up, so an out-of-stock
    /// request for a product that is not in the cart reports `OutOfStock`.
    pub fn with_amount(
        &self,
        id: ProductId,
        amount: u32,
        stock: &StockInfo,
    ) -> Result<(Cart, LineItem), ReconcileError> {
        if amount == 0 {
            return Err(ReconcileError::InvalidAmount(0));
        }

        if !stock.covers(u64::from(amount)) {
            return Err(ReconcileError::OutOfStock {
                product_id: id,
                requested: u64::from(amount),
                available: stock.amount,
            });
        }

        let index = self.position(id).ok_or(ReconcileError::NotInCart(id))?;

        let mut items = self.items.clone();
        let item = items[index].with_amount(amount);
        items[index] = item.clone();

        Ok((Cart { items }, item))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Produto {}", id),
            price: 10.0,
            image_url: String::new(),
        }
    }

    #[derive(Debug, Clone)]
    enum Step {
        Add(u64),
        Remove(u64),
        Set(u64, u32),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (1u64..=4).prop_map(Step::Add),
            (1u64..=4).prop_map(Step::Remove),
            (1u64..=4, 1u32..=6).prop_map(|(id, n)| Step::Set(id, n)),
        ]
    }

    proptest! {
        #[test]
        fn test_reconciliation_keeps_cart_valid(
            steps in prop::collection::vec(step(), 0..40),
            available in 0u32..=5,
        ) {
            let mut cart = Cart::new();

            for step in steps {
                let before = cart.clone();
                let result = match step {
                    Step::Add(id) => {
                        cart.with_added(product(id), &StockInfo { id: ProductId(id), amount: available })
                    }
                    Step::Remove(id) => cart.with_removed(ProductId(id)),
                    Step::Set(id, n) => {
                        cart.with_amount(ProductId(id), n, &StockInfo { id: ProductId(id), amount: available })
                    }
                };

                // Reconciliation never mutates its input
                prop_assert_eq!(&cart, &before);

                if let Ok((next, _)) = result {
                    cart = next;
                }

                prop_assert!(validate_items(cart.items()).is_ok());
                prop_assert!(cart.items().iter().all(|item| item.amount <= available));
            }
        }

        #[test]
        fn test_removal_preserves_relative_order(
            ids in Just((1u64..=8).collect::<Vec<_>>()).prop_shuffle(),
            victim in 1u64..=8,
        ) {
            let items = ids.iter().map(|&id| LineItem::from_product(product(id), 1)).collect();
            let cart = Cart::from_items(items).unwrap();

            let (next, removed) = cart.with_removed(ProductId(victim)).unwrap();
            prop_assert_eq!(removed.id, ProductId(victim));

            let expected: Vec<u64> = ids.into_iter().filter(|&id| id != victim).collect();
            let actual: Vec<u64> = next.items().iter().map(|item| item.id.get()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
