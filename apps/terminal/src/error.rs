//! # App Error Type
//!
//! Unified error type for the terminal shell.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Startup                               Session                          │
//! │  ───────                               ───────                          │
//! │  config file ── toml ──┐               stdin/stdout ── io ──┐           │
//! │  env overrides ────────┼──► AppError   json snapshot ───────┼──► AppError│
//! │  Catalog::new() ───────┘               (fatal, ends session)┘           │
//! │                                                                         │
//! │  Mistyped commands are NOT AppErrors: they become a CommandError,      │
//! │  are shown to the user, and the session continues.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use giftcart_core::CatalogError;
use thiserror::Error;

/// Fatal errors of the terminal shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading stdin, writing stdout, or reading the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for `ShopConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },

    /// The command line could not be understood.
    #[error("{0}\nUsage: giftcart [--config <path>]")]
    Usage(String),

    /// The configured catalog failed validation.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The cart snapshot could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
