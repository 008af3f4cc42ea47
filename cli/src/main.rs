//! `qrfoundry` — generate QR codes from the terminal.
//!
//! The binary is the CLI counterpart of the QRfoundry form surface:
//! pick a content kind (subcommand), fill in its fields (flags), get a
//! scannable symbol in the terminal or a PNG on disk.

#![allow(clippy::exit)]

mod cli;
mod commands;
mod config;
mod output;
mod stdin;

use std::io::IsTerminal as _;

use anyhow::Result;
use clap::Parser as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Cli, Commands};
use crate::output::Output;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Completions { shell } => {
            commands::generate_completions(*shell);
            Ok(())
        }
        Commands::Theme { theme } => commands::run_theme(*theme),
        command => {
            if matches!(command, Commands::Text { text: None }) && std::io::stdin().is_terminal() {
                Output::new().info("Reading text from stdin... Press Ctrl+D to finish.");
            }
            let request = commands::build_request(command, &mut stdin::RealStdinReader::new())?;
            commands::run_generate(&request, &cli.render_options())
        }
    }
}

/// Initialize the tracing subscriber writing to stderr.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
