//! # Shop Session
//!
//! Owns the one cart of a terminal session and turns commands into cart
//! calls.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stdin line ──► Command ──► Session::handle()                           │
//! │                                   │                                     │
//! │                                   ├──► CartManager mutation             │
//! │                                   │         │                           │
//! │                                   │         ▼                           │
//! │                                   │    CartUpdate::transition == Granted│
//! │                                   │         │                           │
//! │                                   │         ▼                           │
//! │                                   │    GiftNotification::raise()        │
//! │                                   │                                     │
//! │                                   └──► Outcome::Continue(rendered text) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gift line never gets user controls: commands addressed at the gift id
//! are answered with a message and do not reach the cart.

use giftcart_core::{CartManager, CartUpdate, Catalog, ProductId};
use tracing::debug;

use crate::command::{Command, HELP};
use crate::error::AppResult;
use crate::notification::GiftNotification;
use crate::render::{CartPanel, ProductList};

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print; keep reading commands.
    Continue(String),
    /// End the session.
    Quit,
}

pub struct Session {
    catalog: Catalog,
    cart: CartManager,
    notification: GiftNotification,
}

impl Session {
    /// Starts a session with an empty cart.
    pub fn new(catalog: Catalog, notification: GiftNotification) -> Self {
        let cart = CartManager::from_catalog(&catalog);
        Session {
            catalog,
            cart,
            notification,
        }
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn notification(&self) -> &GiftNotification {
        &self.notification
    }

    /// Greeting shown before the first prompt.
    pub fn welcome(&self) -> String {
        format!(
            "Shopping Cart\n\n{}\n{}\nType `help` for commands.\n",
            ProductList(&self.catalog),
            self.render_cart()
        )
    }

    /// Handles one command. Only JSON encoding can fail.
    pub fn handle(&mut self, command: Command) -> AppResult<Outcome> {
        debug!(?command, "Handling command");

        let text = match command {
            Command::Products => ProductList(&self.catalog).to_string(),
            Command::Cart => self.render_cart(),
            Command::Json => {
                let mut json = serde_json::to_string_pretty(&self.cart.view())?;
                json.push('\n');
                json
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),

            Command::Add(id) => match self.catalog.product(id) {
                Some(product) => {
                    let update = self.cart.add_item(product);
                    self.after_mutation(update)
                }
                None if self.is_gift(id) => self.gift_refusal(),
                None => format!("No product with id {}.\n", id),
            },
            Command::Increment(id) => self.step_quantity(id, 1),
            Command::Decrement(id) => self.step_quantity(id, -1),
            Command::Set(id, quantity) => {
                if self.is_gift(id) {
                    self.gift_refusal()
                } else {
                    let update = self.cart.set_quantity(id, quantity);
                    self.after_mutation(update)
                }
            }
            Command::Remove(id) => {
                if self.is_gift(id) {
                    self.gift_refusal()
                } else {
                    let update = self.cart.remove_item(id);
                    self.after_mutation(update)
                }
            }
        };

        Ok(Outcome::Continue(text))
    }

    /// The +/- buttons: current quantity plus `delta`, so a decrement from
    /// one removes the line.
    fn step_quantity(&mut self, id: ProductId, delta: i64) -> String {
        if self.is_gift(id) {
            return self.gift_refusal();
        }

        let Some(current) = self.cart.line(id).map(|line| i64::from(line.quantity)) else {
            return format!("Product {} is not in the cart.\n", id);
        };

        let update = self.cart.set_quantity(id, current + delta);
        self.after_mutation(update)
    }

    fn after_mutation(&mut self, update: CartUpdate) -> String {
        if update.transition.is_granted() {
            self.notification.raise();
        }
        self.render_cart()
    }

    fn render_cart(&self) -> String {
        let view = self.cart.view();
        CartPanel {
            view: &view,
            gift_name: &self.catalog.gift_rule().gift().name,
            show_gift_banner: self.notification.is_visible(),
        }
        .to_string()
    }

    fn is_gift(&self, id: ProductId) -> bool {
        id == self.catalog.gift_rule().gift_id()
    }

    fn gift_refusal(&self) -> String {
        format!(
            "The free {} is added and removed automatically.\n",
            self.catalog.gift_rule().gift().name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftcart_core::catalog::REFERENCE_GIFT_ID;
    use giftcart_core::GiftState;
    use std::time::Duration;

    const LAPTOP: ProductId = ProductId::new(1);
    const SMARTPHONE: ProductId = ProductId::new(2);

    fn session() -> Session {
        Session::new(
            Catalog::reference(),
            GiftNotification::new(Duration::from_secs(3)),
        )
    }

    fn text(outcome: Outcome) -> String {
        match outcome {
            Outcome::Continue(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_gift_granted_shows_banner_then_clears() {
        let mut session = session();
        session.handle(Command::Add(LAPTOP)).unwrap();
        let out = text(session.handle(Command::Add(LAPTOP)).unwrap());

        assert!(session.cart().has_gift());
        assert!(session.notification().is_visible());
        assert!(out.contains("Congratulations!"));

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(!session.notification().is_visible());
        let out = text(session.handle(Command::Cart).unwrap());
        assert!(!out.contains("Congratulations!"));
        // The gift itself stays after the banner hides
        assert!(out.contains("FREE GIFT"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_decrement_from_one_removes_line() {
        let mut session = session();
        session.handle(Command::Add(SMARTPHONE)).unwrap();
        session.handle(Command::Increment(SMARTPHONE)).unwrap();
        assert_eq!(session.cart().line(SMARTPHONE).unwrap().quantity, 2);

        session.handle(Command::Decrement(SMARTPHONE)).unwrap();
        session.handle(Command::Decrement(SMARTPHONE)).unwrap();
        assert!(session.cart().is_empty());

        let out = text(session.handle(Command::Decrement(SMARTPHONE)).unwrap());
        assert_eq!(out, "Product 2 is not in the cart.\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_gift_commands_are_refused() {
        let mut session = session();
        session.handle(Command::Set(LAPTOP, 0)).unwrap();
        session.handle(Command::Add(LAPTOP)).unwrap();
        session.handle(Command::Set(LAPTOP, 2)).unwrap();
        assert_eq!(session.cart().gift_state(), GiftState::Present);

        for command in [
            Command::Add(REFERENCE_GIFT_ID),
            Command::Increment(REFERENCE_GIFT_ID),
            Command::Decrement(REFERENCE_GIFT_ID),
            Command::Set(REFERENCE_GIFT_ID, 3),
            Command::Remove(REFERENCE_GIFT_ID),
        ] {
            let out = text(session.handle(command).unwrap());
            assert!(out.contains("added and removed automatically"));
        }
        assert_eq!(session.cart().line(REFERENCE_GIFT_ID).unwrap().quantity, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_product() {
        let mut session = session();
        let out = text(session.handle(Command::Add(ProductId::new(7))).unwrap());
        assert_eq!(out, "No product with id 7.\n");
        assert!(session.cart().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_json_snapshot() {
        let mut session = session();
        session.handle(Command::Add(SMARTPHONE)).unwrap();
        let out = text(session.handle(Command::Json).unwrap());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["subtotal"], 300);
        assert_eq!(json["amountUntilGift"], 700);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit() {
        let mut session = session();
        assert_eq!(session.handle(Command::Quit).unwrap(), Outcome::Quit);
    }
}
