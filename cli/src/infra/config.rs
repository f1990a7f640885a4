//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::GonutConfig;

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    /// Store reading the given file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$GONUT_CONFIG`, or `~/.gonut/config.yaml` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `GONUT_CONFIG` is unset and the home directory
    /// cannot be determined.
    pub fn from_env() -> Result<Self> {
        if let Some(val) = std::env::var_os("GONUT_CONFIG") {
            return Ok(Self::at(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::at(home.join(".gonut").join("config.yaml")))
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<GonutConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(GonutConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(GonutConfig::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
