//! Configuration management for circ.
//!
//! Loads configuration from `${CIRC_HOME}/config.toml` with sensible
//! defaults. A missing file is not an error — every field has a default.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::events::{ConnectionId, Route};
use crate::state::RootState;

/// Identity presented when registering with a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub nick: String,
    pub user: String,
    pub real_name: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            nick: "nick".to_owned(),
            user: "user".to_owned(),
            real_name: "IRC Client".to_owned(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user: UserConfig,
    /// Connection id the initial route points at before any connect.
    pub default_connection: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: UserConfig::default(),
            default_connection: "default".to_owned(),
        }
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# circ configuration

[user]
nick = "nick"
user = "user"
real_name = "IRC Client"

# Connection id the initial route points at before any connect.
# default_connection = "default"
"#;

/// Directory circ keeps its configuration in: `$CIRC_HOME`, falling back
/// to `~/.circ`.
pub fn circ_home() -> PathBuf {
    if let Some(home) = env::var_os("CIRC_HOME") {
        return PathBuf::from(home);
    }
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".circ")
}

/// Path of the config file.
pub fn config_path() -> PathBuf {
    circ_home().join("config.toml")
}

impl Config {
    /// Loads the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Writes the commented default config file and returns its path.
    /// Refuses to overwrite an existing file.
    pub fn init() -> Result<PathBuf> {
        let path = config_path();
        if path.exists() {
            bail!("config already exists at {}", path.display());
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Seed state for a fresh engine: no connections yet, route on the
    /// default connection's status window.
    pub fn initial_state(&self) -> RootState {
        RootState::new(Route::status(ConnectionId::new(&self.default_connection)))
    }
}
