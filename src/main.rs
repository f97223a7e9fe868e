mod analysis;
mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::filter::Directive;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("manuscript_analyzer=info".parse::<Directive>()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
