//! urlmount - inspect URL decomposition and base-path mounting.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    urlmount::logger::set_verbose(cli.verbose);

    let config = cli::load_config(&cli)?;

    match &cli.command {
        Commands::Parse { args } => cli::parse::run_parse(args, &config),
        Commands::Prepend { args } => cli::prepend::run_prepend(args, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}
