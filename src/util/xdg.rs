use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "goto";

fn base_dirs() -> Result<directories::BaseDirs> {
    directories::BaseDirs::new().context("Failed to get home directory")
}

/// Get the XDG config directory for goto
///
/// Returns `$XDG_CONFIG_HOME/goto` or `~/.config/goto` if not set
pub fn config_dir() -> Result<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => base_dirs()?.home_dir().join(".config"),
    };

    Ok(base.join(APP_DIR))
}

/// Get the user's local bin directory
///
/// Returns `$HOME/.local/bin`
pub fn bin_dir() -> Result<PathBuf> {
    Ok(base_dirs()?.home_dir().join(".local/bin"))
}

/// Get the home directory
pub fn home_dir() -> Result<PathBuf> {
    base_dirs().map(|bd| bd.home_dir().to_path_buf())
}
