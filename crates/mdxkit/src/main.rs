//! mdxkit CLI - MDX documentation maintenance toolkit.
//!
//! Provides commands for:
//! - `expand`: Replace snippet directives with rendered markup elements
//! - `scaffold`: Fill empty documents with a placeholder page template
//! - `renumber`: Apply configured ordered filename prefixes
//! - `stamp`: Write lastUpdated frontmatter from version control history

mod commands;
mod error;
mod output;
mod scanner;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{ExpandArgs, RenumberArgs, ScaffoldArgs, StampArgs};
use crate::output::Output;

/// MDX documentation maintenance toolkit.
#[derive(Parser)]
#[command(name = "mdxkit", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace snippet directives with rendered markup elements.
    Expand(ExpandArgs),
    /// Fill empty documents with a placeholder page template.
    Scaffold(ScaffoldArgs),
    /// Apply configured ordered filename prefixes.
    Renumber(RenumberArgs),
    /// Write lastUpdated frontmatter from version control history.
    Stamp(StampArgs),
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
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Expand(args) => args.execute(),
        Commands::Scaffold(args) => args.execute(),
        Commands::Renumber(args) => args.execute(),
        Commands::Stamp(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
