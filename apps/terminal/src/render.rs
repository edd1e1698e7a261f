//! # Rendering
//!
//! Plain-text panels for the terminal. Each panel is a `Display` wrapper so
//! the session can format it straight into its output.
//!
//! ## Cart Panel Layout
//! ```text
//! Cart Summary
//! Subtotal: ₹800
//! Add ₹200 more to get a FREE Wireless Mouse!
//!
//!   [1] Laptop                ₹500 × 1
//!   [2] Smartphone            ₹300 × 1
//! ```

use std::fmt;

use giftcart_core::{CartView, Catalog};

/// The product list with ids to type into `add <id>`.
pub struct ProductList<'a>(pub &'a Catalog);

impl fmt::Display for ProductList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Products")?;
        for product in self.0.products() {
            writeln!(f, "  [{}] {:<20} {}", product.id, product.name, product.price)?;
        }
        let rule = self.0.gift_rule();
        writeln!(
            f,
            "Spend {} or more to get a FREE {}!",
            rule.threshold(),
            rule.gift().name
        )
    }
}

/// The cart summary panel.
pub struct CartPanel<'a> {
    pub view: &'a CartView,
    pub gift_name: &'a str,
    /// Whether the "gift added" banner is currently showing.
    pub show_gift_banner: bool,
}

impl fmt::Display for CartPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cart Summary")?;
        writeln!(f, "Subtotal: {}", self.view.subtotal)?;

        if let Some(remaining) = self.view.amount_until_gift {
            writeln!(
                f,
                "Add {} more to get a FREE {}!",
                remaining, self.gift_name
            )?;
        }

        if self.show_gift_banner {
            writeln!(
                f,
                "Congratulations! Your free {} has been added to the cart!",
                self.gift_name
            )?;
        }

        writeln!(f)?;
        if self.view.lines.is_empty() {
            writeln!(f, "  Your cart is empty")?;
            return writeln!(f, "  Add some products to see them here!");
        }

        for line in &self.view.lines {
            let label = format!("{} × {}", line.product.price, line.quantity);
            if line.is_gift {
                // No quantity or remove controls for the gift
                writeln!(f, "        {:<20} {:<12} FREE GIFT", line.product.name, label)?;
            } else {
                writeln!(
                    f,
                    "  [{}] {:<20} {:<12} inc/dec/remove {}",
                    line.product.id, line.product.name, label, line.product.id
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftcart_core::{CartManager, ProductId};

    #[test]
    fn test_product_list_mentions_gift() {
        let catalog = Catalog::reference();
        let text = ProductList(&catalog).to_string();
        assert!(text.contains("[1] Laptop"));
        assert!(text.contains("₹150"));
        assert!(text.contains("Spend ₹1000 or more to get a FREE Wireless Mouse!"));
    }

    #[test]
    fn test_empty_cart_panel() {
        let catalog = Catalog::reference();
        let cart = CartManager::from_catalog(&catalog);
        let view = cart.view();
        let text = CartPanel {
            view: &view,
            gift_name: "Wireless Mouse",
            show_gift_banner: false,
        }
        .to_string();

        assert!(text.contains("Subtotal: ₹0"));
        assert!(text.contains("Add ₹1000 more to get a FREE Wireless Mouse!"));
        assert!(text.contains("Your cart is empty"));
    }

    #[test]
    fn test_gift_line_has_no_controls() {
        let catalog = Catalog::reference();
        let mut cart = CartManager::from_catalog(&catalog);
        let laptop = catalog.product(ProductId::new(1)).unwrap();
        cart.add_item(laptop);
        cart.add_item(laptop);

        let view = cart.view();
        let text = CartPanel {
            view: &view,
            gift_name: "Wireless Mouse",
            show_gift_banner: true,
        }
        .to_string();

        assert!(!text.contains("more to get a FREE"));
        assert!(text.contains("Congratulations! Your free Wireless Mouse has been added"));

        let gift_row = text.lines().find(|l| l.contains("FREE GIFT")).unwrap();
        assert!(gift_row.contains("Wireless Mouse"));
        assert!(!gift_row.contains("remove"));

        let laptop_row = text.lines().find(|l| l.contains("Laptop")).unwrap();
        assert!(laptop_row.contains("₹500 × 2"));
        assert!(laptop_row.contains("inc/dec/remove 1"));
    }
}
