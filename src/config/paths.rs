//! Path management
//!
//! ## Path Resolution Order
//!
//! 1. `PIXELL_BANK_HOME` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pixell-bank` or `~/.config/pixell-bank`
//! 3. Windows: `%APPDATA%\pixell-bank`

use std::path::{Path, PathBuf};

use crate::error::BankError;

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "PIXELL_BANK_HOME";

const APP_DIR: &str = "pixell-bank";

/// Manages the paths used by the `pixell` front end
#[derive(Debug, Clone)]
pub struct PixellPaths {
    base_dir: PathBuf,
}

impl PixellPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BankError> {
        let base_dir = match std::env::var_os(HOME_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BankError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BankError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BankError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config"))
            .ok_or_else(|| BankError::Config("Could not determine home directory".into()))?,
    };
    Ok(config_base.join(APP_DIR))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BankError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| BankError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR))
}
