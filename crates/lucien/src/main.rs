//! Lucien CLI - localized route and metadata toolchain.
//!
//! Provides commands for:
//! - `build`: Generate one static page per route, plus sitemap and robots.txt
//! - `routes`: Print the canonical URL and title for every route

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, RoutesArgs};
use output::Output;

/// Lucien - localized route and metadata toolchain.
#[derive(Parser)]
#[command(name = "lucien", version, about)]
struct Cli {
    /// Enable verbose output (per-page write and navigation logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the static site: one page per route plus sitemap and robots.txt.
    Build(BuildArgs),
    /// Print the canonical URL and title for every route.
    Routes(RoutesArgs),
}

/// Log filter for the session.
///
/// `--verbose` forces DEBUG; otherwise `LUCIEN_LOG` decides, defaulting
/// to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LUCIEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .init();
    tracing::debug!(verbose = cli.verbose, "Logging initialized");

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
