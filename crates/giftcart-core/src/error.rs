//! # Error Types
//!
//! Domain errors for the gift cart core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog provider ──► Catalog::new() ──► CatalogError   (fallible)      │
//! │                                                                         │
//! │  Presentation ──► CartManager::add_item / set_quantity / remove_item    │
//! │                   (infallible: unknown ids are silent no-ops)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never fail. Only assembling a catalog from external
//! configuration can be rejected.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Catalog Error
// =============================================================================

/// Reasons a catalog can be rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No sellable products were supplied.
    #[error("Catalog must contain at least one product")]
    Empty,

    /// Two products share an id.
    #[error("Duplicate product id {0}")]
    DuplicateProductId(ProductId),

    /// A product or the gift has a blank name.
    #[error("Product {0} has an empty name")]
    EmptyName(ProductId),

    /// A product price is below zero.
    #[error("Product {id} has negative price {price_minor}")]
    NegativePrice { id: ProductId, price_minor: i64 },

    /// The gift product must cost nothing.
    #[error("Free gift {id} must have price 0, got {price_minor}")]
    GiftNotFree { id: ProductId, price_minor: i64 },

    /// The gift product is also listed as a sellable product.
    #[error("Free gift {0} must not also be a sellable product")]
    GiftInCatalog(ProductId),

    /// The gift threshold must be above zero.
    #[error("Gift threshold must be positive, got {0}")]
    InvalidThreshold(i64),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::GiftNotFree {
            id: ProductId::new(99),
            price_minor: 25,
        };
        assert_eq!(err.to_string(), "Free gift 99 must have price 0, got 25");

        let err = CatalogError::DuplicateProductId(ProductId::new(3));
        assert_eq!(err.to_string(), "Duplicate product id 3");
    }
}
