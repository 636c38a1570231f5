//! HaQei CLI - trait profiles and hexagram relations from the terminal
//!
//! This CLI provides:
//! - Trait profile scoring with dominant/secondary trigram resolution
//! - Hexagram relation lookup (綜卦, 錯卦, 互卦, 爻変, 之卦)
//! - Trigram master data listing

use clap::{Parser, Subcommand};
use haqei_content::EngineConfig;
use haqei_engine::ProfileEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{profile, relations, trigrams};
use error::CliResult;
use output::OutputFormat;

/// HaQei CLI application
#[derive(Parser)]
#[command(name = "haqei")]
#[command(about = "HaQei - trait profiles mapped onto trigram archetypes", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HAQEI_CONFIG")]
    config: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Log level; overrides the configuration file
    #[arg(long, env = "HAQEI_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Score a trait profile and resolve its dominant trigrams
    Profile(profile::ProfileArgs),

    /// Show every relation of a hexagram
    #[command(alias = "rel")]
    Relations(relations::RelationsArgs),

    /// List the eight trigrams
    Trigrams,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = EngineConfig::load(cli.config.as_deref())?;

    // Initialize tracing; logs go to stderr so JSON output stays clean
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    if cli.log_json || config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    let engine = ProfileEngine::from_config(&config)?;

    match &cli.command {
        Commands::Profile(args) => profile::execute(args, &engine, cli.output),
        Commands::Relations(args) => relations::execute(args, &engine, cli.output),
        Commands::Trigrams => trigrams::execute(&engine, cli.output),
    }
}
