//! Catalog records and cart line items.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A product as described by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
}

/// Units of a product currently available for sale.
///
/// Always fetched fresh from the catalog before a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub id: ProductId,
    pub amount: u32,
}

impl StockInfo {
    /// Whether `requested` units can be served.
    pub fn covers(&self, requested: u64) -> bool {
        u64::from(self.amount) >= requested
    }
}

/// A product plus the quantity of it held in the cart.
///
/// `amount` is at least 1 for every item stored in a [`crate::Cart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub amount: u32,
}

impl LineItem {
    /// Build a line item from a catalog product.
    pub fn from_product(product: Product, amount: u32) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            amount,
        }
    }

    /// The catalog part of this item.
    pub fn product(&self) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }

    /// Copy of this item with a different amount.
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// `price × amount`.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker() -> Product {
        Product {
            id: ProductId(1),
            name: "Tênis de Caminhada Leve Confortável".into(),
            price: 179.9,
            image_url: "https://cdn.example.com/sneaker-1.jpg".into(),
        }
    }

    #[test]
    fn test_line_item_wire_format() {
        let item = LineItem::from_product(sneaker(), 2);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["imageUrl"], "https://cdn.example.com/sneaker-1.jpg");
        assert_eq!(json["amount"], 2);
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_product_decodes_catalog_json() {
        let json = r#"{"id":3,"name":"Tênis Adidas","price":219.9,"imageUrl":"https://x/3.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.price, 219.9);
    }

    #[test]
    fn test_line_item_product_roundtrip() {
        let item = LineItem::from_product(sneaker(), 1);
        assert_eq!(item.product(), sneaker());
    }

    #[test]
    fn test_subtotal() {
        let item = LineItem::from_product(sneaker(), 3);
        assert!((item.subtotal() - 539.7).abs() < 1e-9);
    }

    #[test]
    fn test_stock_covers() {
        let stock = StockInfo {
            id: ProductId(1),
            amount: 3,
        };
        assert!(stock.covers(0));
        assert!(stock.covers(3));
        assert!(!stock.covers(4));
    }
}
