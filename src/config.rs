//! Pagination configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a user `config.toml` only needs the keys it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! page_button_count = 6     # Numbered buttons between first and last page
//! page_size = 8             # Posts per listing page
//! cache_capacity = 64       # Memoized windows (0 disables the cache)
//!
//! [links]
//! first_page = "/"          # URL of page 1
//! pattern = "/page/{page}/" # URL of every other page
//!
//! [labels]
//! previous = "Previous"
//! next = "Next"
//! ellipsis = "…"
//! nav = "Pagination"        # aria-label of the <nav> element
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::cache::{DEFAULT_CAPACITY, WindowCache};
use crate::links::LinkPattern;
use crate::render::Labels;
use crate::window::{PAGE_BUTTON_COUNT, WindowConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Pagination configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Numbered buttons shown between the first and last page.
    pub page_button_count: u32,
    /// Posts per listing page.
    pub page_size: u32,
    /// Number of memoized windows. `0` disables memoization.
    pub cache_capacity: usize,
    /// URL scheme for listing pages.
    pub links: LinkPattern,
    /// Text shown in the rendered control.
    pub labels: Labels,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_button_count: PAGE_BUTTON_COUNT,
            page_size: 8,
            cache_capacity: DEFAULT_CAPACITY,
            links: LinkPattern::default(),
            labels: Labels::default(),
        }
    }
}

impl PaginationConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_button_count == 0 {
            return Err(ConfigError::Validation(
                "page_button_count must be at least 1".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be at least 1".into(),
            ));
        }
        if !self.links.has_placeholder() {
            return Err(ConfigError::Validation(
                "links.pattern must contain {page}".into(),
            ));
        }
        if self.labels.ellipsis.is_empty() {
            return Err(ConfigError::Validation(
                "labels.ellipsis must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn window(&self) -> WindowConfig {
        WindowConfig {
            page_button_count: self.page_button_count,
        }
    }

    /// A fresh memoization cache sized and shaped by this config.
    pub fn cache(&self) -> WindowCache {
        WindowCache::new(self.window(), self.cache_capacity)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(PaginationConfig::default())?)
}

/// Layer `overlay` on top of `base`.
///
/// Sections (`[links]`, `[labels]`) merge key by key, so a user file can
/// change one label and keep the rest. Any other value in the overlay,
/// including a scalar where the base has a section, replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut table), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                let value = match table.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                table.insert(key, value);
            }
            toml::Value::Table(table)
        }
        (_, replacement) => replacement,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    tracing::debug!(path = %config_path.display(), "loaded config file");
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PaginationConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PaginationConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<PaginationConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Pagination Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Numbered page buttons shown between the always-visible first and last page.
# Listings with more than page_button_count + 2 pages collapse the hidden
# pages behind a single ellipsis.
page_button_count = 6

# Posts per listing page.
page_size = 8

# Number of computed page rows kept in memory. 0 disables the cache.
cache_capacity = 64

# ---------------------------------------------------------------------------
# Page URLs
# ---------------------------------------------------------------------------
[links]
# URL of the first page of a listing.
first_page = "/"

# URL of every other page. {page} is replaced with the page number.
pattern = "/page/{page}/"

# ---------------------------------------------------------------------------
# Labels
# ---------------------------------------------------------------------------
[labels]
previous = "Previous"
next = "Next"
# Shown in place of hidden pages. Never a link.
ellipsis = "…"
# aria-label of the surrounding <nav> element.
nav = "Pagination"
"##
}
