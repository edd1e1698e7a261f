//! # Domain Types
//!
//! Core domain types shared by the catalog and the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │    Product      │        │    CartLine     │                         │
//! │  │  ─────────────  │  ───►  │  ─────────────  │                         │
//! │  │  id (ProductId) │        │  product        │                         │
//! │  │  name           │        │  quantity (≥1)  │                         │
//! │  │  price (Money)  │        │  is_gift        │                         │
//! │  └─────────────────┘        └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog identifier of a product. Unique within one catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in minor currency units. Never negative.
    pub price: Money,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A product held in the cart together with its quantity.
///
/// ## Invariants
/// - `quantity >= 1` (a line at zero is removed, never stored)
/// - a gift line always has `quantity == 1` and a zero price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,

    /// Quantity in the cart.
    pub quantity: u32,

    /// Whether this line is the automatically granted free gift.
    /// The presentation layer hides quantity and remove controls for it.
    pub is_gift: bool,
}

impl CartLine {
    pub(crate) fn new(product: Product) -> Self {
        CartLine {
            product,
            quantity: 1,
            is_gift: false,
        }
    }

    pub(crate) fn gift(product: Product) -> Self {
        CartLine {
            product,
            quantity: 1,
            is_gift: true,
        }
    }

    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new(Product::new(2, "Smartphone", Money::from_minor(300)));
        assert_eq!(line.line_total().minor(), 300);

        line.quantity = 3;
        assert_eq!(line.line_total().minor(), 900);
    }

    #[test]
    fn test_gift_line_shape() {
        let line = CartLine::gift(Product::new(99, "Wireless Mouse", Money::zero()));
        assert!(line.is_gift);
        assert_eq!(line.quantity, 1);
        assert!(line.line_total().is_zero());
    }

    #[test]
    fn test_cart_line_json_is_camel_case() {
        let line = CartLine::new(Product::new(1, "Laptop", Money::from_minor(500)));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["isGift"], false);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["product"]["price"], 500);
        assert_eq!(json["product"]["id"], 1);
    }
}
