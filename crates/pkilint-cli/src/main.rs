//! # pkilint CLI entry point
//!
//! Parses command-line arguments, initializes logging, loads the optional
//! config file, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pkilint_cli::config::CliConfig;
use pkilint_cli::lint::{run_lint, LintArgs};
use pkilint_cli::list::{run_list, ListArgs};
use pkilint_cli::region::{run_region, RegionArgs};

/// pkilint — certificate subject lints
///
/// Runs registered lints over decoded certificates and reports one status
/// per lint.
#[derive(Parser, Debug)]
#[command(name = "pkilint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run all registered lints over a decoded certificate.
    Lint(LintArgs),

    /// Look up one (country, province) pair in the region table.
    Region(RegionArgs),

    /// List registered lints.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
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

    tracing::debug!("pkilint CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match CliConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Lint(args) => run_lint(&args, &config, &mut stdout),
        Commands::Region(args) => run_region(&args, &config, &mut stdout),
        Commands::List(args) => run_list(&args, &config, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
