//! idmap - identity mapping CLI
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use idmap::cli::commands::{self, MappingOptions};
use idmap::cli::{Cli, Commands};
use idmap::config::{Config, ConfigManager};
use idmap::error::IdmapResult;
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

fn run() -> IdmapResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load()?;

    init_logging(cli.verbose, &config);
    debug!("Using config {}", config_manager.path().display());

    let opts = MappingOptions {
        salt: cli.salt,
        no_seed: cli.no_seed,
    };

    match cli.command {
        Commands::User(args) => commands::user(args, &opts, &config),
        Commands::Group(args) => commands::group(args, &opts, &config),
        Commands::Uid(args) => commands::uid(args, &opts, &config),
        Commands::Gid(args) => commands::gid(args, &opts, &config),
        Commands::Synth(args) => commands::synth(args, &opts, &config),
        Commands::Dump(args) => commands::dump(args, &opts, &config),
        Commands::Config(args) => commands::config(args, &config_manager, &config),
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug; `RUST_LOG` wins when set
fn init_logging(verbose: u8, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("idmap=warn"),
        1 => EnvFilter::new("idmap=info"),
        _ => EnvFilter::new("idmap=debug"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
