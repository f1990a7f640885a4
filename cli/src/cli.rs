//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Push sample apps to Cloud Foundry and report how long each phase took
#[derive(Parser)]
#[command(
    name = "gonut",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Push a sample app to Cloud Foundry
    #[command(
        long_about = "Use one of the sub-commands to select a sample app of a list of \
                      programming languages to be pushed to a Cloud Foundry instance."
    )]
    Push(commands::push::PushArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { no_color, command } = self;
        match command {
            Command::Version => {
                commands::version::run();
                Ok(())
            }
            Command::Push(args) => {
                let ctx = OutputContext::new(no_color);
                commands::push::run(&args, &ctx).await
            }
        }
    }
}
