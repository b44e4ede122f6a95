#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use cluster_probe::state::{State, StateOptions};
use cluster_probe::{probe, utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = State::new(StateOptions {
        cloud_manager_url: cli.cloud_manager_url,
        secret_manager_url: cli.secret_manager_url,
        verbose: cli.verbose,
    })?;

    // failed calls are reported by the run itself, they never change the exit code
    probe::run(&state).await;

    Ok(())
}
