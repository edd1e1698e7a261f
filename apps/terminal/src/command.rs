//! # Shell Commands
//!
//! Parses one line of user input into a [`Command`].
//!
//! | Input              | Command                | Cart call                        |
//! |--------------------|------------------------|----------------------------------|
//! | `products`         | `Products`             | none                             |
//! | `add <id>`         | `Add(id)`              | `add_item`                       |
//! | `inc <id>` / `+`   | `Increment(id)`        | `set_quantity(id, qty + 1)`      |
//! | `dec <id>` / `-`   | `Decrement(id)`        | `set_quantity(id, qty - 1)`      |
//! | `set <id> <qty>`   | `Set(id, qty)`         | `set_quantity(id, qty)`          |
//! | `remove <id>`      | `Remove(id)`           | `remove_item`                    |
//! | `cart`             | `Cart`                 | none                             |
//! | `json`             | `Json`                 | none                             |
//! | `help` / `quit`    | `Help` / `Quit`        | none                             |

use std::str::FromStr;

use giftcart_core::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Products,
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Set(ProductId, i64),
    Remove(ProductId),
    Cart,
    Json,
    Help,
    Quit,
}

/// A line that could not be understood. Shown to the user; never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("'{command}' takes no more arguments, got '{extra}'")]
    TooManyArguments {
        command: &'static str,
        extra: String,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };

        let command = match head.to_lowercase().as_str() {
            "products" | "p" => Command::Products,
            "add" | "a" => Command::Add(product_id(&mut words, "add")?),
            "inc" | "+" => Command::Increment(product_id(&mut words, "inc")?),
            "dec" | "-" => Command::Decrement(product_id(&mut words, "dec")?),
            "set" => {
                let id = product_id(&mut words, "set")?;
                let qty = words.next().ok_or(CommandError::MissingArgument {
                    command: "set",
                    argument: "quantity",
                })?;
                let qty = qty
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidNumber(qty.to_string()))?;
                Command::Set(id, qty)
            }
            "remove" | "rm" => Command::Remove(product_id(&mut words, "remove")?),
            "cart" | "c" => Command::Cart,
            "json" => Command::Json,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(CommandError::TooManyArguments {
                command: command.name(),
                extra: extra.to_string(),
            });
        }

        Ok(command)
    }
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Products => "products",
            Command::Add(_) => "add",
            Command::Increment(_) => "inc",
            Command::Decrement(_) => "dec",
            Command::Set(..) => "set",
            Command::Remove(_) => "remove",
            Command::Cart => "cart",
            Command::Json => "json",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn product_id<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<ProductId, CommandError> {
    let raw = words.next().ok_or(CommandError::MissingArgument {
        command,
        argument: "product id",
    })?;
    raw.parse::<u32>()
        .map(ProductId::new)
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

pub const HELP: &str = "\
Commands:
  products            list the catalog
  add <id>            add one unit of a product
  inc <id>            increase quantity by one
  dec <id>            decrease quantity by one (removes at zero)
  set <id> <qty>      set quantity (0 or less removes)
  remove <id>         remove a product
  cart                show the cart
  json                print the cart as JSON
  help                show this help
  quit                leave the shop
";
