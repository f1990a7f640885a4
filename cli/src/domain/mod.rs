//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod duration;
pub mod error;
pub mod push;
pub mod sample_app;

pub use config::{CleanupPolicy, GonutConfig, PushConfig, PushSettings, SummaryVerbosity};
pub use duration::humanize;
pub use error::{ConfigError, PushError};
pub use push::{Phase, PhaseTimings, PushOutcome};
pub use sample_app::{SAMPLE_APPS, SampleApp, SampleAppKind};
