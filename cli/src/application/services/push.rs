//! Application service: sample app push use-case.
//!
//! Resolves the push settings, then pushes one sample app or every app in
//! the registry. Pushes run strictly one after another; the first failure
//! stops the run.

use anyhow::Result;

use crate::application::ports::{AssetProvider, PushEngine, PushRequest, SummaryReporter};
use crate::domain::sample_app::{self, SAMPLE_APPS, SampleApp};
use crate::domain::{PushConfig, PushError, PushOutcome, PushSettings};

/// Which sample apps a push invocation covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushTarget {
    /// A single app, identified by its command name.
    App(String),
    /// Every app in the registry, in registry order.
    All,
}

/// Resolve raw settings into a [`PushConfig`].
///
/// # Errors
///
/// Returns a [`crate::domain::ConfigError`] if a setting is unrecognised.
pub fn resolve_config(settings: &PushSettings) -> Result<PushConfig> {
    Ok(PushConfig::resolve(settings)?)
}

/// Run a push invocation.
///
/// Settings are resolved before any asset or engine call, so a bad setting
/// never leads to a partial deployment.
///
/// # Errors
///
/// Returns the first configuration, lookup, asset or push error encountered.
pub async fn run(
    target: &PushTarget,
    settings: &PushSettings,
    assets: &impl AssetProvider,
    engine: &impl PushEngine,
    reporter: &impl SummaryReporter,
) -> Result<Vec<PushOutcome>> {
    let config = resolve_config(settings)?;

    match target {
        PushTarget::All => push_all(SAMPLE_APPS, &config, assets, engine, reporter).await,
        PushTarget::App(name) => {
            let app = sample_app::lookup(name)
                .ok_or_else(|| PushError::UnknownSampleApp(name.clone()))?;
            let outcome = push_sample_app(app, &config, assets, engine, reporter).await?;
            Ok(vec![outcome])
        }
    }
}

/// Push every app of `registry` in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the error of the first app that fails; later apps are not pushed.
pub async fn push_all(
    registry: &[SampleApp],
    config: &PushConfig,
    assets: &impl AssetProvider,
    engine: &impl PushEngine,
    reporter: &impl SummaryReporter,
) -> Result<Vec<PushOutcome>> {
    let mut outcomes = Vec::with_capacity(registry.len());
    for app in registry {
        outcomes.push(push_sample_app(app, config, assets, engine, reporter).await?);
    }
    Ok(outcomes)
}

/// Push a single sample app and report the outcome.
///
/// # Errors
///
/// Returns [`PushError::AssetUnavailable`] if the payload cannot be produced
/// and [`PushError::PushFailed`] if the push engine fails. Nothing is
/// reported on failure.
pub async fn push_sample_app(
    app: &SampleApp,
    config: &PushConfig,
    assets: &impl AssetProvider,
    engine: &impl PushEngine,
    reporter: &impl SummaryReporter,
) -> Result<PushOutcome> {
    let app_name = sample_app::generate_app_name(app.app_name_prefix);

    let payload = assets
        .provide(app.asset)
        .map_err(|source| PushError::AssetUnavailable {
            app: app.caption.to_string(),
            source,
        })?;

    tracing::info!(
        app = app.caption,
        app_name = %app_name,
        cleanup = %config.cleanup,
        payload = %payload.as_ref().display(),
        "pushing sample app",
    );

    let request = PushRequest {
        caption: app.caption,
        app_name: &app_name,
        payload: payload.as_ref(),
        cleanup: config.cleanup,
    };
    let outcome = engine
        .push(&request)
        .await
        .map_err(|source| PushError::PushFailed {
            app: app.caption.to_string(),
            source,
        })?;

    tracing::info!(
        app = app.caption,
        elapsed_ms = u64::try_from(outcome.elapsed.as_millis()).unwrap_or(u64::MAX),
        buildpack = %outcome.buildpack,
        stack = %outcome.stack,
        "sample app pushed",
    );

    reporter.summary(app.caption, &outcome, config.verbosity);
    Ok(outcome)
}
