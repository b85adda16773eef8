//! Chronostrat CLI.
//!
//! Scan time-sorted buckets and enumerate every legal chronological chain.
//!
//! # Quick Start
//!
//! ```bash
//! # Walk the built-in sample set end to end
//! chronostrat demo
//!
//! # Scan buckets from a JSON file, render at most ten chains
//! chronostrat run ./buckets.json --limit 10
//!
//! # Machine-readable output
//! chronostrat run ./buckets.json --json
//! ```

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Chronostrat - chain enumeration over time-sorted buckets.
#[derive(Parser)]
#[command(name = "chronostrat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Scan and enumerate the built-in sample set.
    Demo,

    /// Scan buckets from a JSON file and enumerate their chains.
    Run {
        /// Path to a JSON array of buckets; each timestamp is either raw
        /// nanoseconds or an RFC 3339 / YYYY-MM-DD string.
        file: String,

        /// Render at most this many chains.
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit machine-readable JSON instead of tables.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    render::set_no_color(cli.no_color);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Demo => commands::demo::run(),
        Commands::Run { file, limit, json } => commands::run::run(&file, limit, json),
    }
}
