//! Persistent settings.
//!
//! Stored as JSON. The file is looked up at `$FBT_CONFIG`, falling back to
//! `filtering-backtrace.json` in the working directory.

use crate::error::{BacktraceError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV: &str = "FBT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "filtering-backtrace.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Print the innermost frame last.
    #[serde(default)]
    pub reverse_backtrace: bool,

    /// Default log filter when `FBT_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reverse_backtrace: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Reads settings from `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&text)
            .map_err(|e| BacktraceError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| BacktraceError::Config(e.to_string()))?;
        fs::write(path, text)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}
