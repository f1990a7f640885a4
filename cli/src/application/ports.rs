//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{CleanupPolicy, GonutConfig, PushOutcome, SampleAppKind, SummaryVerbosity};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Everything the push engine needs to deploy one sample app.
pub struct PushRequest<'a> {
    /// Display name of the sample app, e.g. `"Golang"`.
    pub caption: &'a str,
    /// Generated, unique app name on the platform.
    pub app_name: &'a str,
    /// Directory holding the app's files.
    pub payload: &'a Path,
    /// Whether the app is deleted afterwards.
    pub cleanup: CleanupPolicy,
}

// ── Asset Port ────────────────────────────────────────────────────────────────

/// Supplies the file tree of a sample app.
pub trait AssetProvider {
    /// Handle to the payload directory. Dropping it may remove the directory.
    type Payload: AsRef<Path>;

    /// Produce the payload directory for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be produced.
    fn provide(&self, kind: SampleAppKind) -> Result<Self::Payload>;
}

// ── Push Engine Port ──────────────────────────────────────────────────────────

/// Performs the full remote lifecycle of a push: create, upload, stage,
/// start and, depending on the cleanup policy, delete.
#[allow(async_fn_in_trait)]
pub trait PushEngine {
    /// Push the app described by `request` and return its phase timings.
    async fn push(&self, request: &PushRequest<'_>) -> Result<PushOutcome>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

impl<T: CommandRunner> CommandRunner for &T {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        (**self).run(program, args).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output> {
        (**self).run_with_timeout(program, args, timeout).await
    }
}

// ── Reporting Ports ───────────────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

/// Receives the outcome of each successful push.
pub trait SummaryReporter {
    /// Render the push summary at the given verbosity.
    fn summary(&self, caption: &str, outcome: &PushOutcome, verbosity: SummaryVerbosity);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the configuration file.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<GonutConfig>;
    /// Location of the configuration file.
    fn path(&self) -> PathBuf;
}
