use crate::core::path::config_file;
use crate::core::{NpkgError, NpkgResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Shell opened by `npkg explore <pkg>` when no command is given
    ///
    /// Defaults to `$SHELL` (or `sh`) on Unix and `%ComSpec%` (or `cmd`) on Windows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Shell used to run commands (`sh -c` / `cmd /d /s /c` when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_shell: Option<String>,
}

/// The interactive shell to fall back to when none is configured
pub fn default_shell() -> String {
    let (var, fallback) = if cfg!(windows) {
        ("ComSpec", "cmd")
    } else {
        ("SHELL", "sh")
    };

    env::var(var)
        .ok()
        .filter(|shell| !shell.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl Config {
    /// Load config from the platform-specific config directory
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\npkg\config.yaml
    /// - Linux: ~/.config/npkg/config.yaml
    /// - macOS: ~/Library/Application Support/npkg/config.yaml
    ///
    /// A missing file yields the defaults; nothing is written.
    pub fn load() -> NpkgResult<Self> {
        Self::load_from(&config_file()?)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> NpkgResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| NpkgError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// The configured interactive shell, or the platform default
    pub fn shell(&self) -> String {
        self.shell.clone().unwrap_or_else(default_shell)
    }
}
