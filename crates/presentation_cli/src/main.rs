//! StopFinder CLI
//!
//! Locates the nearest transit stop and nearby restaurants for a place name.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use application::{ApplicationError, LocatorOptions, LocatorService, format_report};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, build_locator_service, init_tracing};
use tracing::debug;

/// StopFinder CLI
#[derive(Parser)]
#[command(name = "stopfinder")]
#[command(author, version, about = "Find the nearest transit stop and places around a location", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./config.toml if present)
    #[arg(short, long, global = true, env = "STOPFINDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate a place, its nearest stop, and nearby places
    ///
    /// Example: stopfinder locate Boston Common
    /// Example: stopfinder locate "Harvard Square" --category coffee --json
    Locate {
        /// Place name; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        place: Vec<String>,

        /// Places category (default from config: restaurants)
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of places to fetch (default from config: 9)
        #[arg(long)]
        limit: Option<usize>,

        /// Number of places to print in the text report
        #[arg(long, default_value_t = 5)]
        show: usize,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate configuration, then print it with secrets omitted
    CheckConfig,
}

/// Exit code for each failure kind
const fn exit_code_for(err: &ApplicationError) -> u8 {
    match err {
        ApplicationError::InvalidInput(_) => 2,
        ApplicationError::NotFound(_) => 3,
        ApplicationError::Upstream { .. } => 4,
        ApplicationError::Configuration(_) => 5,
    }
}

/// Merge per-call flags over the locator's configured options
fn resolve_options(
    locator: &LocatorService,
    category: Option<String>,
    limit: Option<usize>,
) -> LocatorOptions {
    let defaults = locator.options();
    LocatorOptions::new(
        category.unwrap_or_else(|| defaults.category.clone()),
        limit.unwrap_or(defaults.limit),
    )
}

fn fail(err: &ApplicationError) -> ExitCode {
    eprintln!("❌ {}", err.user_message());
    ExitCode::from(exit_code_for(err))
}

async fn locate(
    config: &AppConfig,
    place: &str,
    options: (Option<String>, Option<usize>),
    show: usize,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let locator = match build_locator_service(config) {
        Ok(locator) => locator,
        Err(e) => return Ok(fail(&e)),
    };
    let options = resolve_options(&locator, options.0, options.1);
    debug!(?options, "Running locate");

    match locator.locate_with(place, &options).await {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", format_report(&report, show));
            }
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => Ok(fail(&e)),
    }
}

fn check_config(config: &AppConfig) -> anyhow::Result<ExitCode> {
    println!("🔑 Credentials:");
    for (var, present) in config.credential_status() {
        let mark = if present { "✅ set" } else { "❌ missing" };
        println!("   {var}: {mark}");
    }
    println!();
    println!("⚙️  Effective configuration:");
    println!("{}", toml::to_string_pretty(config)?);

    match config.validate() {
        Ok(()) => {
            println!("✅ Configuration is valid");
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => Ok(fail(&e)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Locate {
            place,
            category,
            limit,
            show,
            json,
        } => locate(&config, &place.join(" "), (category, limit), show, json).await,
        Commands::CheckConfig => check_config(&config),
    }
}
