mod cli;
mod config;
mod error;
mod trigger;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments first so logging honours --verbose
    let cli = Cli::parse();
    utils::logger::init(cli.verbose())?;

    cli.execute().await
}
