//! Command-line interface for dp-config-gen
//!
//! Running without a subcommand behaves like `generate`: any input not given
//! as a flag is asked for interactively.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;
mod prompt;
mod sites;
mod utils;

/// Merge per-site deployment parameters from a spreadsheet into JSON configuration templates
#[derive(Parser)]
#[command(name = "dp-config-gen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: generate::GenerateArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate config, log and variable files for each site (default)
    Generate(generate::GenerateArgs),

    /// List the site columns available in the parameter sheet
    Sites(sites::SitesArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Some(Commands::Generate(args)) => generate::run(args),
        Some(Commands::Sites(args)) => sites::run(args),
        None => generate::run(cli.generate),
    }
}
