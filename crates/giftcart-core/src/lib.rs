//! # giftcart-core: Pure Cart Logic
//!
//! This crate is the **heart** of the gift cart. It contains all business
//! logic as plain synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gift Cart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation Layer (apps/terminal)                │   │
//! │  │    Product list ──► Cart view ──► Gift banner ──► "Add X more"  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ add_item / set_quantity / remove_item │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ giftcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   cart    │  │   │
//! │  │   │  Product  │  │   Money   │  │  Catalog  │  │CartManager│  │   │
//! │  │   │ CartLine  │  │           │  │ GiftRule  │  │ CartView  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBALS                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductId, CartLine
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Validated product catalog and the reference shop
//! - [`gift`] - Free gift threshold rule and its state machine
//! - [`cart`] - `CartManager`, the owner of all cart state
//! - [`error`] - Catalog errors
//!
//! ## Example Usage
//!
//! ```rust
//! use giftcart_core::{CartManager, Catalog, ProductId};
//!
//! let catalog = Catalog::reference();
//! let mut cart = CartManager::from_catalog(&catalog);
//!
//! let phone = catalog.product(ProductId::new(2)).unwrap();
//! let update = cart.add_item(phone);
//!
//! assert_eq!(update.subtotal.minor(), 300);
//! assert_eq!(cart.amount_until_gift().unwrap().minor(), 700);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod gift;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartManager, CartUpdate, CartView};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use gift::{GiftRule, GiftState, GiftTransition};
pub use money::Money;
pub use types::*;
