//! # Catalog
//!
//! The fixed list of sellable products plus the gift rule.
//!
//! A catalog is configuration, not runtime data: it is assembled once at
//! startup (from defaults or a config file) and never mutated afterwards.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::gift::GiftRule;
use crate::money::Money;
use crate::types::{Product, ProductId};

/// Gift threshold of the reference shop.
pub const REFERENCE_THRESHOLD: Money = Money::from_minor(1000);

/// Id of the reference free gift.
pub const REFERENCE_GIFT_ID: ProductId = ProductId::new(99);

/// A validated product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    gift_rule: GiftRule,
}

impl Catalog {
    /// Validates and assembles a catalog.
    ///
    /// ## Rules
    /// - at least one sellable product
    /// - product ids are unique and names are non-blank
    /// - prices are never negative
    /// - the gift costs exactly zero and is not itself sellable
    /// - the threshold is positive
    pub fn new(products: Vec<Product>, gift: Product, threshold: Money) -> CatalogResult<Self> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice {
                    id: product.id,
                    price_minor: product.price.minor(),
                });
            }
        }

        if gift.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(gift.id));
        }
        if !gift.price.is_zero() {
            return Err(CatalogError::GiftNotFree {
                id: gift.id,
                price_minor: gift.price.minor(),
            });
        }
        if seen.contains(&gift.id) {
            return Err(CatalogError::GiftInCatalog(gift.id));
        }
        if !threshold.is_positive() {
            return Err(CatalogError::InvalidThreshold(threshold.minor()));
        }

        Ok(Catalog {
            products,
            gift_rule: GiftRule::new(gift, threshold),
        })
    }

    /// The reference shop: four gadgets and a free mouse above ₹1000.
    pub fn reference() -> Self {
        Catalog {
            products: reference_products(),
            gift_rule: GiftRule::new(reference_gift(), REFERENCE_THRESHOLD),
        }
    }

    /// Sellable products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a sellable product. The gift is never returned here.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn gift_rule(&self) -> &GiftRule {
        &self.gift_rule
    }
}

/// Products of the reference shop.
pub fn reference_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", Money::from_minor(500)),
        Product::new(2, "Smartphone", Money::from_minor(300)),
        Product::new(3, "Headphones", Money::from_minor(100)),
        Product::new(4, "Smartwatch", Money::from_minor(150)),
    ]
}

/// Free gift of the reference shop.
pub fn reference_gift() -> Product {
    Product::new(REFERENCE_GIFT_ID.get(), "Wireless Mouse", Money::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_is_valid() {
        let reference = Catalog::reference();
        let rebuilt = Catalog::new(
            reference_products(),
            reference_gift(),
            REFERENCE_THRESHOLD,
        )
        .unwrap();
        assert_eq!(reference, rebuilt);
        assert_eq!(reference.products().len(), 4);
        assert_eq!(reference.gift_rule().gift_id(), REFERENCE_GIFT_ID);
    }

    #[test]
    fn test_product_lookup_excludes_gift() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.product(ProductId::new(1)).unwrap().name, "Laptop");
        assert!(catalog.product(REFERENCE_GIFT_ID).is_none());
        assert!(catalog.product(ProductId::new(42)).is_none());
    }

    #[test]
    fn test_rejects_empty() {
        let err = Catalog::new(vec![], reference_gift(), REFERENCE_THRESHOLD).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1, "Laptop", Money::from_minor(500)),
            Product::new(1, "Laptop Pro", Money::from_minor(900)),
        ];
        let err = Catalog::new(products, reference_gift(), REFERENCE_THRESHOLD).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateProductId(ProductId::new(1)));
    }

    #[test]
    fn test_rejects_blank_name_and_negative_price() {
        let blank = vec![Product::new(1, "  ", Money::from_minor(500))];
        assert_eq!(
            Catalog::new(blank, reference_gift(), REFERENCE_THRESHOLD).unwrap_err(),
            CatalogError::EmptyName(ProductId::new(1))
        );

        let negative = vec![Product::new(1, "Laptop", Money::from_minor(-1))];
        assert!(matches!(
            Catalog::new(negative, reference_gift(), REFERENCE_THRESHOLD),
            Err(CatalogError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_gift() {
        let priced_gift = Product::new(99, "Wireless Mouse", Money::from_minor(20));
        assert!(matches!(
            Catalog::new(reference_products(), priced_gift, REFERENCE_THRESHOLD),
            Err(CatalogError::GiftNotFree { .. })
        ));

        let sellable_gift = Product::new(1, "Laptop", Money::zero());
        assert_eq!(
            Catalog::new(reference_products(), sellable_gift, REFERENCE_THRESHOLD).unwrap_err(),
            CatalogError::GiftInCatalog(ProductId::new(1))
        );
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        assert_eq!(
            Catalog::new(reference_products(), reference_gift(), Money::zero()).unwrap_err(),
            CatalogError::InvalidThreshold(0)
        );
    }
}
