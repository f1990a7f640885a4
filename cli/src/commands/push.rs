//! `gonut push <app>|all`: push sample apps and report timings.
//!
//! One sub-command is generated per registry entry, plus `all`.

use std::time::Duration;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgMatches, Args, FromArgMatches, Subcommand};

use crate::application::ports::ConfigStore;
use crate::application::services::push::{self as service, PushTarget};
use crate::domain::{SAMPLE_APPS, SampleApp, SummaryVerbosity};
use crate::infra::assets::EmbeddedAssets;
use crate::infra::cf::CfPushEngine;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::output::{OutputContext, TerminalReporter};

/// Name of the aggregate sub-command.
pub const ALL_COMMAND: &str = "all";

/// Arguments for the push command.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Delete application after push: always, never, on-success [default: always]
    #[arg(short, long, global = true, env = "GONUT_DELETE", value_name = "POLICY")]
    pub delete: Option<String>,

    /// Push summary detail level: quiet, short, full [default: short]
    #[arg(short, long, global = true, env = "GONUT_SUMMARY", value_name = "LEVEL")]
    pub summary: Option<String>,

    #[command(subcommand)]
    pub target: PushCommand,
}

/// Sub-command selected under `push`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushCommand(pub PushTarget);

fn sample_app_command(app: &SampleApp) -> clap::Command {
    clap::Command::new(app.command)
        .visible_aliases(app.aliases.iter().copied())
        .about(format!("Push a {} sample app to Cloud Foundry", app.caption))
        .long_about(format!(
            "Push a {} sample app to Cloud Foundry. The application will be deleted after \
             it was pushed successfully.",
            app.caption
        ))
}

fn all_command() -> clap::Command {
    clap::Command::new(ALL_COMMAND)
        .about("Pushes all available sample apps to Cloud Foundry")
        .long_about(
            "Pushes all available sample apps to Cloud Foundry, one after another. \
             Each application will be deleted after it was pushed successfully. \
             The first failure stops the run.",
        )
}

impl FromArgMatches for PushCommand {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        // clap reports the canonical name even when an alias was typed.
        match matches.subcommand() {
            Some((ALL_COMMAND, _)) => Ok(Self(PushTarget::All)),
            Some((name, _)) => Ok(Self(PushTarget::App(name.to_string()))),
            None => Err(clap::Error::raw(
                ErrorKind::MissingSubcommand,
                "a sample app or 'all' is required\n",
            )),
        }
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}

impl Subcommand for PushCommand {
    fn augment_subcommands(cmd: clap::Command) -> clap::Command {
        SAMPLE_APPS
            .iter()
            .fold(cmd, |cmd, app| cmd.subcommand(sample_app_command(app)))
            .subcommand(all_command())
            .subcommand_required(true)
    }

    fn augment_subcommands_for_update(cmd: clap::Command) -> clap::Command {
        Self::augment_subcommands(cmd)
    }

    fn has_subcommand(name: &str) -> bool {
        name == ALL_COMMAND
            || SAMPLE_APPS
                .iter()
                .any(|app| app.command == name || app.aliases.contains(&name))
    }
}

/// Run `gonut push <app>|all`.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded, a setting is
/// invalid, or any push fails.
pub async fn run(args: &PushArgs, ctx: &OutputContext) -> Result<()> {
    let store = YamlConfigStore::from_env()?;
    tracing::debug!(path = %store.path().display(), "loading config");
    let file_config = store.load()?;
    let settings = file_config.push_settings(args.delete.as_deref(), args.summary.as_deref());

    let quiet = settings.summary == SummaryVerbosity::Quiet.as_str();
    let reporter = TerminalReporter::new(ctx).with_progress(!quiet);
    let runner = TokioCommandRunner::new(Duration::from_secs(file_config.cf.timeout_secs))
        .with_env("CF_COLOR", "false");
    let engine = CfPushEngine::new(runner, &file_config.cf.binary, &reporter);

    service::run(&args.target.0, &settings, &EmbeddedAssets, &engine, &reporter).await?;
    Ok(())
}
