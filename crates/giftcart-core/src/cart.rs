//! # Cart Manager
//!
//! Owns the cart lines, applies user mutations and keeps the free gift line
//! consistent with the subtotal.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action          CartManager call        Line change               │
//! │  ───────────          ────────────────        ───────────               │
//! │                                                                         │
//! │  Add to Cart ───────► add_item(&product) ───► qty += 1 or push(line)    │
//! │                                                                         │
//! │  + / - ─────────────► set_quantity(id, n) ──► qty = n (n <= 0 removes)  │
//! │                                                                         │
//! │  Remove ────────────► remove_item(id) ──────► lines.retain(..)          │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                      reevaluate_gift()  (every mutation, synchronously) │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                  CartUpdate { subtotal, gift, transition }              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - at most one line per product id
//! - every line has `quantity >= 1`
//! - the gift line is present iff the non-gift subtotal reaches the threshold
//! - the gift line always has quantity 1 and is never touched by user calls
//!
//! ## Example
//! ```rust
//! use giftcart_core::{Catalog, CartManager, GiftTransition, ProductId};
//!
//! let catalog = Catalog::reference();
//! let mut cart = CartManager::from_catalog(&catalog);
//! let laptop = catalog.product(ProductId::new(1)).unwrap();
//!
//! cart.add_item(laptop);
//! let update = cart.add_item(laptop);
//!
//! assert_eq!(update.subtotal.minor(), 1000);
//! assert_eq!(update.transition, GiftTransition::Granted);
//! assert!(cart.has_gift());
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::gift::{GiftRule, GiftState, GiftTransition};
use crate::money::Money;
use crate::types::{CartLine, Product, ProductId};

// =============================================================================
// Derived State
// =============================================================================

/// Derived state handed back after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartUpdate {
    /// Subtotal over all lines (the gift contributes zero).
    pub subtotal: Money,

    /// Gift line presence after the mutation.
    pub gift: GiftState,

    /// What the post-mutation gift check did.
    pub transition: GiftTransition,
}

/// Read-only snapshot for rendering or JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub subtotal: Money,
    pub gift: GiftState,
    pub threshold: Money,
    /// Amount still needed for the gift; `None` once it is granted.
    pub amount_until_gift: Option<Money>,
    pub total_quantity: u64,
}

// =============================================================================
// Cart Manager
// =============================================================================

/// The shopping cart for one session.
///
/// The presentation layer owns exactly one instance and calls it directly;
/// there is no shared or global cart.
#[derive(Debug, Clone)]
pub struct CartManager {
    rule: GiftRule,
    lines: Vec<CartLine>,
}

impl CartManager {
    /// Creates an empty cart governed by `rule`.
    pub fn new(rule: GiftRule) -> Self {
        CartManager {
            rule,
            lines: Vec::new(),
        }
    }

    /// Creates an empty cart using the catalog's gift rule.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.gift_rule().clone())
    }

    pub fn gift_rule(&self) -> &GiftRule {
        &self.rule
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - product already in cart: quantity increases by one
    /// - product not in cart: appended with quantity 1
    /// - the gift product is ignored; it only enters through re-evaluation
    pub fn add_item(&mut self, product: &Product) -> CartUpdate {
        if product.id == self.rule.gift_id() {
            warn!(product_id = %product.id, "Refusing to add gift product directly");
            return self.finish();
        }

        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = line.quantity, "Incremented cart line");
        } else {
            self.lines.push(CartLine::new(product.clone()));
            debug!(product_id = %product.id, "Added cart line");
        }

        self.finish()
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `new_quantity <= 0`: same as [`remove_item`](Self::remove_item)
    /// - product not in cart: no-op
    /// - gift line: no-op
    pub fn set_quantity(&mut self, product_id: ProductId, new_quantity: i64) -> CartUpdate {
        if product_id == self.rule.gift_id() {
            warn!(product_id = %product_id, "Gift line quantity is not adjustable");
            return self.finish();
        }

        if new_quantity <= 0 {
            return self.remove_item(product_id);
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                debug!(product_id = %product_id, quantity, "Set cart line quantity");
            }
            None => debug!(product_id = %product_id, "Product not in cart, ignoring quantity change"),
        }

        self.finish()
    }

    /// Removes the line for `product_id`, if any. The gift line is ignored.
    pub fn remove_item(&mut self, product_id: ProductId) -> CartUpdate {
        if product_id == self.rule.gift_id() {
            warn!(product_id = %product_id, "Gift line cannot be removed directly");
            return self.finish();
        }

        let before = self.lines.len();
        self.lines.retain(|line| line.product_id() != product_id);
        if self.lines.len() < before {
            debug!(product_id = %product_id, "Removed cart line");
        } else {
            debug!(product_id = %product_id, "Product not in cart, nothing to remove");
        }

        self.finish()
    }

    /// Brings the gift line in line with the current non-gift subtotal.
    ///
    /// Runs at the end of every mutation. Calling it again without an
    /// intervening mutation always returns [`GiftTransition::Unchanged`].
    pub fn reevaluate_gift(&mut self) -> GiftTransition {
        let eligible_subtotal = self.subtotal_excluding_gift();
        let qualifies = self.rule.qualifies(eligible_subtotal);

        match (qualifies, self.gift_state()) {
            (true, GiftState::Absent) => {
                self.lines.push(CartLine::gift(self.rule.gift().clone()));
                info!(
                    gift = %self.rule.gift().name,
                    subtotal = %eligible_subtotal,
                    threshold = %self.rule.threshold(),
                    "Free gift granted"
                );
                GiftTransition::Granted
            }
            (false, GiftState::Present) => {
                self.lines.retain(|line| !line.is_gift);
                info!(
                    gift = %self.rule.gift().name,
                    subtotal = %eligible_subtotal,
                    threshold = %self.rule.threshold(),
                    "Free gift revoked"
                );
                GiftTransition::Revoked
            }
            _ => GiftTransition::Unchanged,
        }
    }

    fn finish(&mut self) -> CartUpdate {
        let transition = self.reevaluate_gift();
        CartUpdate {
            subtotal: self.subtotal(),
            gift: self.gift_state(),
            transition,
        }
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// Lines in first-added order. The gift, when present, sits where it was
    /// granted.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product_id)
    }

    /// Sum of `price * quantity` over every line, gift included.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Subtotal that counts toward the gift threshold.
    pub fn subtotal_excluding_gift(&self) -> Money {
        self.lines
            .iter()
            .filter(|line| !line.is_gift)
            .map(CartLine::line_total)
            .sum()
    }

    pub fn gift_state(&self) -> GiftState {
        if self.lines.iter().any(|line| line.is_gift) {
            GiftState::Present
        } else {
            GiftState::Absent
        }
    }

    #[inline]
    pub fn has_gift(&self) -> bool {
        self.gift_state().is_present()
    }

    /// How much more must be spent before the gift is granted.
    pub fn amount_until_gift(&self) -> Option<Money> {
        self.rule.remaining(self.subtotal_excluding_gift())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines, gift included.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines, gift included.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn view(&self) -> CartView {
        CartView {
            lines: self.lines.clone(),
            subtotal: self.subtotal(),
            gift: self.gift_state(),
            threshold: self.rule.threshold(),
            amount_until_gift: self.amount_until_gift(),
            total_quantity: self.total_quantity(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
