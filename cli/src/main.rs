//! gonut - Push sample apps to Cloud Foundry and report timings

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gonut_cli::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `GONUT_LOG` (or `RUST_LOG`), `warn` by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GONUT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
