//! Bootkit CLI - render component fragments.
//!
//! Provides commands for:
//! - `render`: Render one or all fragments from `bootkit.toml` to HTML
//! - `check`: Validate a fragment catalog and list its fragments

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs};
use output::Output;

/// Bootkit - render navigation and accordion fragments.
#[derive(Parser)]
#[command(name = "bk", version, about)]
struct Cli {
    /// Enable verbose output (INFO level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render fragments to HTML on stdout.
    Render(RenderArgs),
    /// Validate the fragment catalog.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
