//! Greeks CLI - Command Line Option Analytics
//!
//! Operational entry point for the option Greeks engine.
//!
//! # Commands
//!
//! - `greeks price` - Black-Scholes price and Greeks for one option
//! - `greeks iv` - Implied volatility from an observed price
//! - `greeks pop` - Probability of profit at expiration
//! - `greeks move` - Expected move of the underlying over a horizon
//!
//! # Architecture
//!
//! As the **S**ervice layer this crate only parses arguments, loads
//! configuration and renders results; all analytics live in
//! `pricer_models` and `pricer_core`.

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::expected_move::ExpectedMoveArgs;
use commands::implied_vol::ImpliedVolArgs;
use commands::price::PriceArgs;
use commands::probability::ProbabilityArgs;
use commands::OutputFormat;
use config::LogLevel;

/// Option pricing, Greeks and risk metrics
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: greeks.toml, if present]
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option and compute its Greeks
    Price(PriceArgs),

    /// Solve for implied volatility from a market price
    Iv(ImpliedVolArgs),

    /// Estimate the probability of profit at expiration
    Pop(ProbabilityArgs),

    /// Estimate the expected move of the underlying
    Move(ExpectedMoveArgs),
}

fn init_tracing(log_level: &str) {
    // Logs go to stderr so JSON output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::build_config(cli.config.as_deref())?;

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    let today = Local::now().date_naive();

    let output = match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config, today, cli.format),
        Commands::Iv(args) => commands::implied_vol::run(args, &config, today, cli.format),
        Commands::Pop(args) => commands::probability::run(args, &config, today, cli.format),
        Commands::Move(args) => commands::expected_move::run(args, cli.format),
    }?;

    println!("{}", output);
    Ok(())
}
