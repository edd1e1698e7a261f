//! # Free Gift Rule
//!
//! The threshold rule that grants a free product.
//!
//! ## Gift Line State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │          non-gift subtotal >= threshold  (insert line, Granted)        │
//! │   ┌────────┐ ─────────────────────────────────────► ┌─────────┐        │
//! │   │ ABSENT │                                        │ PRESENT │        │
//! │   └────────┘ ◄───────────────────────────────────── └─────────┘        │
//! │          non-gift subtotal < threshold   (remove line, Revoked)        │
//! │                                                                         │
//! │   Any other evaluation leaves the state alone (Unchanged).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

/// The designated gift product and the subtotal that unlocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftRule {
    gift: Product,
    threshold: Money,
}

impl GiftRule {
    /// Builds a rule. Validation of the gift price and threshold happens in
    /// [`Catalog::new`](crate::catalog::Catalog::new).
    pub(crate) fn new(gift: Product, threshold: Money) -> Self {
        GiftRule { gift, threshold }
    }

    pub fn gift(&self) -> &Product {
        &self.gift
    }

    #[inline]
    pub fn gift_id(&self) -> ProductId {
        self.gift.id
    }

    #[inline]
    pub fn threshold(&self) -> Money {
        self.threshold
    }

    /// Whether a non-gift subtotal qualifies for the gift.
    #[inline]
    pub fn qualifies(&self, subtotal_excluding_gift: Money) -> bool {
        subtotal_excluding_gift >= self.threshold
    }

    /// How much more must be spent before the gift is granted, if anything.
    pub fn remaining(&self, subtotal_excluding_gift: Money) -> Option<Money> {
        if self.qualifies(subtotal_excluding_gift) {
            None
        } else {
            Some(self.threshold.saturating_sub(subtotal_excluding_gift))
        }
    }
}

/// Whether the gift line is currently in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GiftState {
    Absent,
    Present,
}

impl GiftState {
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, GiftState::Present)
    }
}

/// What a gift re-evaluation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GiftTransition {
    /// State already matched the rule.
    Unchanged,
    /// ABSENT -> PRESENT. The presentation layer should show the notice.
    Granted,
    /// PRESENT -> ABSENT.
    Revoked,
}

impl GiftTransition {
    #[inline]
    pub fn is_granted(&self) -> bool {
        matches!(self, GiftTransition::Granted)
    }
}
