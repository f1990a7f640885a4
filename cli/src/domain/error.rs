//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while resolving push settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}

// ── Push errors ───────────────────────────────────────────────────────────────

/// Errors raised while pushing a sample app.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("Failed to detect which sample app is to be tested: {0}")]
    UnknownSampleApp(String),

    #[error("{app} sample app is not available: {source:#}")]
    AssetUnavailable {
        app: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to push {app} sample app: {source:#}")]
    PushFailed {
        app: String,
        #[source]
        source: anyhow::Error,
    },
}
