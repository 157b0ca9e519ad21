//! Error types for the catalog module.

use rocketcart_core::ProductId;
use thiserror::Error;

/// Errors that can occur while querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no record for this product.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Transport-level failure (connection refused, reset, DNS...).
    #[error("network error: {0}")]
    Network(String),

    /// The catalog answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("decoding error: {0}")]
    Decode(String),

    /// The catalog is unreachable (used by test doubles).
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
