//! rootdigits - digits of square and cube roots, on demand
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use rootdigits::cli::{Cli, Commands};
use rootdigits::config::{Config, ConfigManager};
use rootdigits::error::RootResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> RootResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load()?;

    init_logging(cli.verbose, &config);
    debug!("Using config at {}", config_manager.path().display());

    match cli.command {
        Commands::Digits(args) => rootdigits::cli::commands::digits(args, &config),
        Commands::Find(args) => rootdigits::cli::commands::find(args, &config),
        Commands::Select(args) => rootdigits::cli::commands::select(args, &config),
        Commands::Config(args) => rootdigits::cli::commands::config(args, &config, &config_manager),
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let level = match verbose {
        0 if config.general.verbose => 1,
        n => n,
    };
    let filter = match level {
        0 => EnvFilter::new("rootdigits=warn"),
        1 => EnvFilter::new("rootdigits=info"),
        _ => EnvFilter::new("rootdigits=debug"),
    };

    if config.general.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    }
}
