//! # Gift Cart Terminal Entry Point
//!
//! ## Usage
//! ```bash
//! # Reference shop
//! cargo run -p giftcart-terminal
//!
//! # Custom catalog
//! cargo run -p giftcart-terminal -- --config ./shop.toml
//!
//! # Watch gift transitions
//! RUST_LOG=giftcart_core=info cargo run -p giftcart-terminal
//! ```

use std::env;

use giftcart_terminal::{AppResult, CliAction, ShopConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<()> {
    giftcart_terminal::init_tracing();

    let config_path = match giftcart_terminal::parse_args(env::args().skip(1))? {
        CliAction::Run { config_path } => config_path,
        CliAction::Help => {
            println!("Usage: giftcart [--config <path>]");
            return Ok(());
        }
    };

    let config = ShopConfig::load(config_path)?;
    giftcart_terminal::run(config).await
}
