//! Domain types and resolvers for push configuration.
//!
//! Pure functions only; no I/O, no async, no filesystem access.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_DELETE_SETTINGS: &[&str] = &["always", "never", "on-success"];
pub const VALID_SUMMARY_SETTINGS: &[&str] = &["quiet", "short", "full"];

pub const DEFAULT_DELETE_SETTING: &str = "always";
pub const DEFAULT_SUMMARY_SETTING: &str = "short";

/// Default `cf` executable used by the push engine.
pub const DEFAULT_CF_BINARY: &str = "cf";

/// Default per-command timeout for the push engine, in seconds.
pub const DEFAULT_CF_TIMEOUT_SECS: u64 = 900;

// ── Cleanup policy ───────────────────────────────────────────────────────────

/// Whether a pushed sample app is deleted after the push attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupPolicy {
    /// Delete the app whether the push succeeded or not.
    Always,
    /// Keep the app on the platform.
    Never,
    /// Delete the app only when the push succeeded.
    OnSuccess,
}

impl CleanupPolicy {
    /// Returns `true` when the app should be deleted given the push result.
    #[must_use]
    pub fn should_delete(self, push_succeeded: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::OnSuccess => push_succeeded,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::OnSuccess => "on-success",
        }
    }
}

impl FromStr for CleanupPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "on-success" => Ok(Self::OnSuccess),
            other => Err(invalid("delete", other, VALID_DELETE_SETTINGS)),
        }
    }
}

impl fmt::Display for CleanupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Summary verbosity ────────────────────────────────────────────────────────

/// How much of the push report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryVerbosity {
    Quiet,
    Short,
    Full,
}

impl SummaryVerbosity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

impl FromStr for SummaryVerbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiet" => Ok(Self::Quiet),
            "short" => Ok(Self::Short),
            "full" => Ok(Self::Full),
            other => Err(invalid("summary", other, VALID_SUMMARY_SETTINGS)),
        }
    }
}

impl fmt::Display for SummaryVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn invalid(key: &str, value: &str, valid: &[&str]) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        valid: valid.join(", "),
    }
}

// ── Raw settings and resolved config ─────────────────────────────────────────

/// Unresolved push settings as given on the command line or in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSettings {
    /// Cleanup policy string: `always`, `never` or `on-success`.
    pub delete: String,
    /// Summary detail level string: `quiet`, `short` or `full`.
    pub summary: String,
}

impl Default for PushSettings {
    fn default() -> Self {
        Self {
            delete: DEFAULT_DELETE_SETTING.to_string(),
            summary: DEFAULT_SUMMARY_SETTING.to_string(),
        }
    }
}

/// Resolved, read-only push configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushConfig {
    pub cleanup: CleanupPolicy,
    pub verbosity: SummaryVerbosity,
}

impl PushConfig {
    /// Resolve raw settings into typed values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if either setting is unrecognised.
    /// The cleanup policy is checked first.
    pub fn resolve(settings: &PushSettings) -> Result<Self, ConfigError> {
        let cleanup = settings.delete.parse()?;
        let verbosity = settings.summary.parse()?;
        Ok(Self { cleanup, verbosity })
    }
}

// ── Config file schema ───────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.gonut/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GonutConfig {
    /// Defaults for `gonut push`.
    pub push: PushDefaults,
    /// Push engine settings.
    pub cf: CfConfig,
}

/// Defaults for the `--delete` and `--summary` flags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PushDefaults {
    pub delete: Option<String>,
    pub summary: Option<String>,
}

/// `cf` CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CfConfig {
    /// Executable name or path.
    pub binary: String,
    /// Timeout applied to each `cf` invocation, in seconds.
    pub timeout_secs: u64,
}

impl Default for CfConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_CF_BINARY.to_string(),
            timeout_secs: DEFAULT_CF_TIMEOUT_SECS,
        }
    }
}

impl GonutConfig {
    /// Merge command-line values over the file defaults.
    ///
    /// Flags win over the file; the file wins over built-in defaults.
    #[must_use]
    pub fn push_settings(&self, delete: Option<&str>, summary: Option<&str>) -> PushSettings {
        let defaults = PushSettings::default();
        PushSettings {
            delete: delete
                .map(str::to_string)
                .or_else(|| self.push.delete.clone())
                .unwrap_or(defaults.delete),
            summary: summary
                .map(str::to_string)
                .or_else(|| self.push.summary.clone())
                .unwrap_or(defaults.summary),
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
