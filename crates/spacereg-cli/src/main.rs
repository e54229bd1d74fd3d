//! # spacereg CLI entry point
//!
//! Parses command-line arguments, installs logging, builds the frameworks
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spacereg_cli::assess::{run_assess, AssessArgs};
use spacereg_cli::build_frameworks;
use spacereg_cli::corpus::{run_corpus, CorpusArgs};
use spacereg_cli::domains::{run_domains, DomainsArgs};

/// Regulatory compliance assessment for space-sector organizations.
///
/// Assesses organization profiles against export control, NIS2, debris
/// mitigation, cybersecurity, environmental and insurance requirements.
#[derive(Parser, Debug)]
#[command(name = "spacereg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the engine configuration (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the regulatory domains.
    Domains(DomainsArgs),

    /// Print a domain's requirement corpus.
    Corpus(CorpusArgs),

    /// Assess a profile and print the report.
    Assess(AssessArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Reports go to stdout; keep logs off it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "spacereg starting");

    let result = build_frameworks(cli.config.as_deref()).and_then(|frameworks| match &cli.command {
        Commands::Domains(args) => run_domains(args, &frameworks),
        Commands::Corpus(args) => run_corpus(args, &frameworks),
        Commands::Assess(args) => run_assess(args, &frameworks),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
