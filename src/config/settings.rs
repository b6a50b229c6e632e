//! User settings
//!
//! Controls logging verbosity and whether alert emails are echoed to the
//! terminal by the `pixell` binary.

use serde::{Deserialize, Serialize};

use super::paths::PixellPaths;
use crate::error::BankError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// `tracing` filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Print alert emails to stdout as they are sent
    #[serde(default = "default_echo_alerts")]
    pub echo_alerts: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_echo_alerts() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_filter: default_log_filter(),
            echo_alerts: default_echo_alerts(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PixellPaths) -> Result<Self, BankError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)?;

        serde_json::from_str(&contents)
            .map_err(|e| BankError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk, creating the base directory if needed
    pub fn save(&self, paths: &PixellPaths) -> Result<(), BankError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;

        Ok(())
    }
}
