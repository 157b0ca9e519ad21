//! Snapshot vectors for format compatibility.
//!
//! Each vector pairs a cart with the exact JSON persisted for it. Stores
//! must decode every vector and re-encode it byte for byte, otherwise carts
//! saved by an earlier storefront build would be lost or rewritten.

use serde::{Deserialize, Serialize};

use rocketcart_core::{Cart, LineItem, ProductId};

/// A single snapshot vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotVector {
    pub name: String,
    pub description: String,
    /// Expected `(id, amount)` pairs, in cart order.
    pub amounts: Vec<(u64, u32)>,
    /// The persisted JSON.
    pub snapshot: String,
}

fn vector(name: &str, description: &str, amounts: &[(u64, u32)], snapshot: &str) -> SnapshotVector {
    SnapshotVector {
        name: name.to_string(),
        description: description.to_string(),
        amounts: amounts.to_vec(),
        snapshot: snapshot.to_string(),
    }
}

/// All known snapshot vectors.
pub fn all_vectors() -> Vec<SnapshotVector> {
    vec![
        vector("empty", "A cart that was emptied", &[], "[]"),
        vector(
            "single_item",
            "One product, one unit",
            &[(1, 1)],
            r#"[{"id":1,"name":"Tênis de Caminhada Leve Confortável","price":179.9,"imageUrl":"https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg","amount":1}]"#,
        ),
        vector(
            "insertion_order",
            "Items keep insertion order, not id order",
            &[(3, 2), (1, 1), (2, 5)],
            concat!(
                r#"[{"id":3,"name":"Tênis Adidas Duramo Lite 2.0","price":219.9,"imageUrl":"https://cdn.example.com/3.jpg","amount":2},"#,
                r#"{"id":1,"name":"Tênis de Caminhada Leve Confortável","price":179.9,"imageUrl":"https://cdn.example.com/1.jpg","amount":1},"#,
                r#"{"id":2,"name":"Tênis VR Caminhada Confortável Detalhes Couro Masculino","price":139.9,"imageUrl":"https://cdn.example.com/2.jpg","amount":5}]"#
            ),
        ),
        vector(
            "large_amount",
            "Amounts are plain JSON integers",
            &[(42, 1000)],
            r#"[{"id":42,"name":"Meia","price":9.5,"imageUrl":"","amount":1000}]"#,
        ),
    ]
}

/// Decode a vector's snapshot and compare it with the expected amounts.
pub fn decode_vector(vector: &SnapshotVector) -> Result<Cart, String> {
    let cart = Cart::from_snapshot(&vector.snapshot).map_err(|e| e.to_string())?;

    let actual: Vec<(u64, u32)> = cart
        .items()
        .iter()
        .map(|item: &LineItem| (item.id.get(), item.amount))
        .collect();
    if actual != vector.amounts {
        return Err(format!(
            "{}: expected {:?}, decoded {:?}",
            vector.name, vector.amounts, actual
        ));
    }

    Ok(cart)
}

/// Verify that every vector decodes and re-encodes unchanged.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let cart = decode_vector(&vector)?;
        let encoded = cart.to_snapshot().map_err(|e| e.to_string())?;
        if encoded != vector.snapshot {
            return Err(format!(
                "{}: re-encoded snapshot differs\n  expected: {}\n  actual:   {}",
                vector.name, vector.snapshot, encoded
            ));
        }
    }
    Ok(())
}

/// Find a vector by name.
pub fn vector_by_name(name: &str) -> Option<SnapshotVector> {
    all_vectors().into_iter().find(|v| v.name == name)
}

/// The product ids referenced by a vector, in cart order.
pub fn vector_ids(vector: &SnapshotVector) -> Vec<ProductId> {
    vector.amounts.iter().map(|&(id, _)| ProductId(id)).collect()
}
