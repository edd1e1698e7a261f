//! # Shop Configuration
//!
//! Catalog, gift rule and notification timing for the terminal shop.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     GIFTCART_THRESHOLD=1500                                            │
//! │     GIFTCART_NOTIFICATION_SECS=5                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/giftcart/config.toml (Linux)                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     The reference shop: 4 gadgets, free mouse at ₹1000, 3s banner      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [shop]
//! notification_secs = 3
//!
//! [gift]
//! id = 99
//! name = "Wireless Mouse"
//! threshold = 1000
//!
//! [[products]]
//! id = 1
//! name = "Laptop"
//! price = 500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use giftcart_core::catalog::{reference_gift, reference_products, REFERENCE_THRESHOLD};
use giftcart_core::{Catalog, Money, Product};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

pub const ENV_THRESHOLD: &str = "GIFTCART_THRESHOLD";
pub const ENV_NOTIFICATION_SECS: &str = "GIFTCART_NOTIFICATION_SECS";

// =============================================================================
// Sections
// =============================================================================

/// General shop behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// How long the "gift granted" banner stays visible.
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_notification_secs() -> u64 {
    3
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            notification_secs: default_notification_secs(),
        }
    }
}

/// The free gift and what it takes to earn it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftSettings {
    #[serde(default = "default_gift_id")]
    pub id: u32,

    #[serde(default = "default_gift_name")]
    pub name: String,

    /// Non-gift subtotal (minor units) at which the gift is granted.
    #[serde(default = "default_threshold")]
    pub threshold: i64,
}

fn default_gift_id() -> u32 {
    reference_gift().id.get()
}

fn default_gift_name() -> String {
    reference_gift().name
}

fn default_threshold() -> i64 {
    REFERENCE_THRESHOLD.minor()
}

impl Default for GiftSettings {
    fn default() -> Self {
        GiftSettings {
            id: default_gift_id(),
            name: default_gift_name(),
            threshold: default_threshold(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete shop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub shop: ShopSettings,

    #[serde(default)]
    pub gift: GiftSettings,

    #[serde(default = "reference_products")]
    pub products: Vec<Product>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            shop: ShopSettings::default(),
            gift: GiftSettings::default(),
            products: reference_products(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform config dir)
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing file in
    /// the default location is not.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;

        // Fail at startup rather than on the first cart operation
        config.catalog()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading shop config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_THRESHOLD) {
            self.gift.threshold = parse_override(ENV_THRESHOLD, &value)?;
            debug!(threshold = self.gift.threshold, "Overriding gift threshold from environment");
        }

        if let Some(value) = lookup(ENV_NOTIFICATION_SECS) {
            self.shop.notification_secs = parse_override(ENV_NOTIFICATION_SECS, &value)?;
            debug!(
                secs = self.shop.notification_secs,
                "Overriding notification duration from environment"
            );
        }

        Ok(())
    }

    /// Builds and validates the catalog described by this config.
    pub fn catalog(&self) -> AppResult<Catalog> {
        let gift = Product::new(self.gift.id, self.gift.name.clone(), Money::zero());
        let catalog = Catalog::new(
            self.products.clone(),
            gift,
            Money::from_minor(self.gift.threshold),
        )?;
        Ok(catalog)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.shop.notification_secs)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "giftcart", "giftcart")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| AppError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}
