//! # Gift Cart Terminal
//!
//! A thin presentation layer over `giftcart-core`: reads commands from
//! stdin, drives one [`CartManager`](giftcart_core::CartManager), and prints
//! the catalog and cart after every action.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load `ShopConfig` (defaults → TOML file → environment)
//! 3. Build and validate the `Catalog`
//! 4. Create the `Session` (empty cart + notification flag)
//! 5. Read commands until `quit` or end of input

pub mod command;
pub mod config;
pub mod error;
pub mod notification;
pub mod render;
pub mod session;

use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use config::ShopConfig;
pub use error::{AppError, AppResult};

use crate::command::Command;
use crate::notification::GiftNotification;
use crate::session::{Outcome, Session};

const PROMPT: &str = "> ";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart mutation
/// - `RUST_LOG=giftcart_core=info` - Show gift grants and revocations
/// - Default: WARN level, so logs do not clutter the shop UI
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Start a session, optionally with an explicit config file.
    Run { config_path: Option<PathBuf> },
    /// Print usage and exit.
    Help,
}

/// Parses arguments (without the program name).
///
/// Unknown arguments are reported on stderr and skipped. A `--config` with
/// no path after it is an error.
pub fn parse_args<I>(args: I) -> AppResult<CliAction>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => return Err(AppError::Usage(format!("{} needs a path", arg))),
            },
            "--help" | "-h" => return Ok(CliAction::Help),
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
    }

    Ok(CliAction::Run { config_path })
}

/// Runs an interactive session on stdin/stdout.
pub async fn run(config: ShopConfig) -> AppResult<()> {
    let catalog = config.catalog()?;
    info!(
        products = catalog.products().len(),
        threshold = %catalog.gift_rule().threshold(),
        gift = %catalog.gift_rule().gift().name,
        "Catalog loaded"
    );

    let session = Session::new(catalog, GiftNotification::new(config.notification_duration()));
    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    serve(session, input, output).await
}

/// Reads commands from `input` and writes responses to `output` until
/// `quit` or end of input.
pub async fn serve<R, W>(mut session: Session, input: R, mut output: W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(session.welcome().as_bytes()).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            let response = match line.parse::<Command>() {
                Ok(command) => match session.handle(command)? {
                    Outcome::Continue(text) => text,
                    Outcome::Quit => break,
                },
                Err(err) => {
                    warn!(input = %line, error = %err, "Rejected command");
                    format!("{}. Type `help` for commands.\n", err)
                }
            };
            output.write_all(response.as_bytes()).await?;
        }

        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
    }

    output.write_all(b"Goodbye!\n").await?;
    output.flush().await?;
    info!("Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftcart_core::Catalog;
    use std::time::Duration;

    async fn run_script(script: &str) -> String {
        let session = Session::new(
            Catalog::reference(),
            GiftNotification::new(Duration::from_secs(3)),
        );
        let mut output = Vec::new();
        serve(session, script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            parse_args(args(&[])).unwrap(),
            CliAction::Run { config_path: None }
        );
        assert_eq!(
            parse_args(args(&["-c", "shop.toml"])).unwrap(),
            CliAction::Run {
                config_path: Some(PathBuf::from("shop.toml"))
            }
        );
        assert_eq!(parse_args(args(&["--help", "--config"])).unwrap(), CliAction::Help);
    }

    #[test]
    fn test_config_flag_without_path_is_usage_error() {
        for flag in ["--config", "-c"] {
            let err = parse_args(args(&[flag])).unwrap_err();
            assert!(matches!(err, AppError::Usage(_)));
            assert!(err.to_string().starts_with(&format!("{} needs a path", flag)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_session_grants_gift() {
        let out = run_script("add 1\nadd 1\ncart\nquit\nadd 2\n").await;

        assert!(out.starts_with("Shopping Cart"));
        assert!(out.contains("Subtotal: ₹1000"));
        assert!(out.contains("Congratulations! Your free Wireless Mouse has been added"));
        assert!(out.contains("FREE GIFT"));
        // Nothing after quit is processed
        assert!(!out.contains("₹300 × 1"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_command_keeps_session_alive() {
        let out = run_script("buy 1\n\nadd 2\n").await;
        assert!(out.contains("Unknown command 'buy'. Type `help` for commands."));
        assert!(out.contains("Subtotal: ₹300"));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
