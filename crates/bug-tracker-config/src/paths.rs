//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/bug-tracker/`, `~/.cache/bug-tracker/`
//! - macOS: `~/Library/Application Support/bug-tracker/`, `~/Library/Caches/bug-tracker/`
//! - Windows: `%APPDATA%\bug-tracker\`, `%LOCALAPPDATA%\bug-tracker\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "bug-tracker";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Path of the global config file (`<config dir>/bug-tracker/config.toml`)
///
/// Does not touch the filesystem.
pub fn app_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join("config.toml"))
}
