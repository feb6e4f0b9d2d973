#![allow(clippy::enum_variant_names)]

use clap::Parser as _;
use tracing::debug;

use crate::application::{Application, ApplicationError};
use crate::cli::Cli;

mod application;
mod bridge;
mod cli;
mod namespace;
mod snapshot;

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run().await?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        // stdout carries bridge frames, so logs go to stderr
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
