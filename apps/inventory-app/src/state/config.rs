//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Serialize;
use stockroom_core::{Money, MAX_SEARCH_TERM_LEN};

/// File name of the store inside the data directory.
pub const DATA_FILE_NAME: &str = "stockroom.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the window title and header
    pub app_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Where the store file lives
    pub data_path: PathBuf,

    /// Longest accepted search term, in characters
    pub max_search_len: usize,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Name: "Stockroom"
    /// - Currency: `$`
    /// - Data path: platform data directory (see [`default_data_path`])
    /// - Search cap: 100 characters
    fn default() -> Self {
        ConfigState {
            app_name: "Stockroom".to_string(),
            currency_symbol: "$".to_string(),
            data_path: default_data_path(),
            max_search_len: MAX_SEARCH_TERM_LEN,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DATA_PATH`: Override the store file location
    /// - `STOCKROOM_APP_NAME`: Override the app name
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("STOCKROOM_DATA_PATH").filter(|p| !p.is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        if let Some(app_name) = lookup("STOCKROOM_APP_NAME") {
            config.app_name = app_name;
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Sets the data path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Formats a price with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_app::state::ConfigState;
    /// use stockroom_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_price(&self, price: Money) -> String {
        price.format_with(&self.currency_symbol)
    }
}

/// Determines the store file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.stockroom.stockroom/stockroom.json`
/// - **Windows**: `%APPDATA%\stockroom\stockroom\data\stockroom.json`
/// - **Linux**: `~/.local/share/stockroom/stockroom.json`
///
/// Falls back to `./stockroom.json` when no home directory can be found.
pub fn default_data_path() -> PathBuf {
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_price_default_symbol() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_price(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_price(Money::from_cents(-5)), "-$0.05");
    }

    #[test]
    fn test_format_price_uses_symbol() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_price(Money::from_cents(150)), "€1.50");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOCKROOM_DATA_PATH", "/srv/stock/store.json"),
            ("STOCKROOM_APP_NAME", "Back Room"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.data_path, PathBuf::from("/srv/stock/store.json"));
        assert_eq!(config.app_name, "Back Room");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.max_search_len, MAX_SEARCH_TERM_LEN);
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        assert!(default_data_path().ends_with(DATA_FILE_NAME));
    }
}
