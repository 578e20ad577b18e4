//! # charstr CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use charstr_cli::catalog::{run_catalog, CatalogArgs};
use charstr_cli::config::CliConfig;
use charstr_cli::decode::{run_decode, run_numbers, DecodeArgs, NumbersArgs};
use charstr_cli::encode::{run_encode, EncodeArgs};

/// ASN.1 restricted character string tool.
///
/// Converts between text and the byte forms of UTF8String, PrintableString,
/// IA5String, BMPString, UniversalString and the rest of the catalog.
#[derive(Parser, Debug)]
#[command(name = "charstr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode text into the byte form of a string type.
    Encode(EncodeArgs),

    /// Decode a hex byte form into text.
    Decode(DecodeArgs),

    /// Decode byte values given as integers into text.
    Numbers(NumbersArgs),

    /// List the string type catalog.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("charstr CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Encode(args) => run_encode(args, &config),
        Commands::Decode(args) => run_decode(args, &config),
        Commands::Numbers(args) => run_numbers(args, &config),
        Commands::Catalog(args) => run_catalog(args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
