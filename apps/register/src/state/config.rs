//! # Configuration State
//!
//! Register settings loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MESA_STORE_NAME="Downtown Deli"                                    │
//! │     MESA_CURRENCY_SYMBOL="€"                                           │
//! │     MESA_MAX_CART_LINES=50                                             │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     See ConfigState::default()                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read-only after initialization.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::DEFAULT_MAX_CART_LINES;

/// Register configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store display name
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Maximum number of lines in one cart
    pub max_cart_lines: usize,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Mesa POS Dev Store"
    /// - Currency: $ with 2 decimals
    /// - Cart: 100 lines
    fn default() -> Self {
        ConfigState {
            store_name: "Mesa POS Dev Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            max_cart_lines: DEFAULT_MAX_CART_LINES,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MESA_STORE_NAME`: Override store name
    /// - `MESA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `MESA_MAX_CART_LINES`: Override the cart line cap (positive integer)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("MESA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("MESA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("MESA_MAX_CART_LINES") {
            match raw.trim().parse::<usize>() {
                Ok(lines) if lines > 0 => config.max_cart_lines = lines,
                _ => warn!(value = %raw, "Ignoring invalid MESA_MAX_CART_LINES"),
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_register::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
