//! Infrastructure implementation of the `PushEngine` port on top of the
//! Cloud Foundry `cf` CLI.
//!
//! Every phase is a separate `cf` invocation timed on its own:
//!
//! | phase          | command                                   |
//! |----------------|-------------------------------------------|
//! | initialisation | `cf target`                               |
//! | creating       | `cf create-app <name>`                    |
//! | uploading      | `cf push <name> -p <dir> --no-start`      |
//! | staging        | `cf stage <name>`                         |
//! | starting       | `cf start <name>`                         |
//!
//! Buildpack and stack come from the app's current droplet.

use std::process::Output;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::ports::{CommandRunner, ProgressReporter, PushEngine, PushRequest};
use crate::domain::{Phase, PhaseTimings, PushOutcome};

/// Shown when the droplet does not name a buildpack or stack.
const UNKNOWN: &str = "unknown";

/// `PushEngine` that shells out to the `cf` CLI.
pub struct CfPushEngine<'a, R, P> {
    runner: R,
    binary: String,
    reporter: &'a P,
}

impl<'a, R: CommandRunner, P: ProgressReporter> CfPushEngine<'a, R, P> {
    #[must_use]
    pub fn new(runner: R, binary: &str, reporter: &'a P) -> Self {
        Self {
            runner,
            binary: binary.to_string(),
            reporter,
        }
    }

    /// Run `cf` and fail on a non-zero exit status.
    async fn cf(&self, args: &[&str]) -> Result<Output> {
        let output = self.runner.run(&self.binary, args).await?;
        if !output.status.success() {
            anyhow::bail!(
                "cf {} failed ({}): {}",
                args.first().copied().unwrap_or_default(),
                output.status,
                failure_message(&output)
            );
        }
        Ok(output)
    }

    async fn run_phases(&self, request: &PushRequest<'_>) -> Result<PushOutcome> {
        let name = request.app_name;
        let dir = request.payload.to_string_lossy();
        let started = Instant::now();
        let mut phases = PhaseTimings::default();

        for phase in Phase::ALL {
            self.reporter
                .step(&format!("{}: {}", request.caption, describe(phase, name)));
            let phase_started = Instant::now();
            self.cf(&phase_args(phase, name, &dir))
                .await
                .with_context(|| format!("{} phase failed", phase.label()))?;
            let elapsed = phase_started.elapsed();
            tracing::debug!(app_name = name, phase = phase.label(), ?elapsed, "phase done");
            phases.set(phase, elapsed);
        }
        let elapsed = started.elapsed();

        self.reporter
            .step(&format!("{}: reading droplet of {name}", request.caption));
        let droplet = self
            .current_droplet(name)
            .await
            .context("reading buildpack and stack")?;

        Ok(PushOutcome {
            elapsed,
            phases,
            buildpack: droplet.buildpack_names().unwrap_or_else(|| UNKNOWN.to_string()),
            stack: droplet.stack.unwrap_or_else(|| UNKNOWN.to_string()),
        })
    }

    async fn current_droplet(&self, name: &str) -> Result<Droplet> {
        let guid_output = self.cf(&["app", name, "--guid"]).await?;
        let guid = String::from_utf8_lossy(&guid_output.stdout).trim().to_string();
        if guid.is_empty() {
            anyhow::bail!("cf app {name} --guid returned no GUID");
        }

        let path = format!("/v3/apps/{guid}/droplets/current");
        let output = self.cf(&["curl", &path]).await?;
        parse_droplet(&output.stdout)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.cf(&["delete", name, "-f", "-r"]).await.map(|_| ())
    }
}

impl<R: CommandRunner, P: ProgressReporter> PushEngine for CfPushEngine<'_, R, P> {
    async fn push(&self, request: &PushRequest<'_>) -> Result<PushOutcome> {
        let name = request.app_name;
        let result = self.run_phases(request).await;
        let succeeded = result.is_ok();

        if !request.cleanup.should_delete(succeeded) {
            tracing::info!(app_name = name, cleanup = %request.cleanup, "keeping app");
            return result;
        }

        self.reporter
            .step(&format!("{}: deleting {name}", request.caption));
        tracing::info!(app_name = name, cleanup = %request.cleanup, "deleting app");
        let deleted = self.delete(name).await;

        match (result, deleted) {
            (Ok(outcome), Ok(())) => Ok(outcome),
            (Ok(_), Err(e)) => Err(e.context(format!("deleting {name}"))),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(delete_err)) => {
                tracing::warn!(app_name = name, error = %format!("{delete_err:#}"), "cleanup after failed push failed");
                self.reporter
                    .warn(&format!("Could not delete {name}, remove it manually"));
                Err(e)
            }
        }
    }
}

fn describe(phase: Phase, name: &str) -> String {
    match phase {
        Phase::Initialisation => "checking cf target".to_string(),
        Phase::Creating => format!("creating {name}"),
        Phase::Uploading => format!("uploading {name}"),
        Phase::Staging => format!("staging {name}"),
        Phase::Starting => format!("starting {name}"),
    }
}

fn phase_args<'a>(phase: Phase, name: &'a str, dir: &'a str) -> Vec<&'a str> {
    match phase {
        Phase::Initialisation => vec!["target"],
        Phase::Creating => vec!["create-app", name],
        Phase::Uploading => vec!["push", name, "-p", dir, "--no-start"],
        Phase::Staging => vec!["stage", name],
        Phase::Starting => vec!["start", name],
    }
}

/// Pick the most useful part of a failed command's output.
///
/// `cf` prints most errors to stdout, so fall back to it when stderr is empty.
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout)
    } else {
        stderr
    };
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let tail = lines.len().saturating_sub(5);
    lines[tail..].join("\n")
}

// ── Droplet JSON ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Droplet {
    stack: Option<String>,
    buildpacks: Vec<DropletBuildpack>,
    errors: Vec<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DropletBuildpack {
    name: Option<String>,
    buildpack_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiError {
    detail: String,
}

impl Droplet {
    fn buildpack_names(&self) -> Option<String> {
        let names: Vec<&str> = self
            .buildpacks
            .iter()
            .filter_map(|bp| bp.name.as_deref().or(bp.buildpack_name.as_deref()))
            .collect();
        (!names.is_empty()).then(|| names.join(", "))
    }
}

fn parse_droplet(body: &[u8]) -> Result<Droplet> {
    let droplet: Droplet = serde_json::from_slice(body).context("parsing droplet JSON")?;
    if let Some(err) = droplet.errors.first() {
        anyhow::bail!("cloud controller error: {}", err.detail);
    }
    Ok(droplet)
}
