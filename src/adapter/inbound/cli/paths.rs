//! Path utilities for breakeven.
//!
//! Application data lives under `~/.breakeven/`:
//! - `~/.breakeven/config.toml` - application configuration
//!
//! `BREAKEVEN_CONFIG` overrides the config location.

use std::path::PathBuf;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "BREAKEVEN_CONFIG";

/// Returns the breakeven home directory (`~/.breakeven/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".breakeven")
}

/// Returns the default config file path.
///
/// `$BREAKEVEN_CONFIG` when set, otherwise `~/.breakeven/config.toml`.
pub fn default_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join("config.toml"))
}
