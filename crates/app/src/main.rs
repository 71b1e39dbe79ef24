//! Registrar RPC command-line client - Main Entry Point
//!
//! Loads endpoint settings, initialises tracing, and runs one subcommand
//! against the registrar's XML-RPC API.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Outcome;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the JSON response.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match commands::run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            Outcome::Failed.exit_code()
        }
    }
}
