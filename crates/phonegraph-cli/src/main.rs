//! Phonegraph CLI - build a call graph and answer queries about it
//!
//! Every file argument is loaded into one graph. Queries are then read
//! from stdin, two numbers per line, and answered on stdout.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "phonegraph")]
#[command(author = "Phonegraph Contributors")]
#[command(version)]
#[command(about = "Answer who-called-whom questions from call records", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Write the built graph's edges to this file as JSON
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Print graph size after loading
    #[arg(long)]
    stats: bool,

    /// Call-record files, two phone numbers per line
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();

    let options = commands::RunOptions {
        files: cli.files,
        export: cli.export,
        stats: cli.stats,
    };

    match commands::run(&options) {
        Ok(summary) if summary.is_clean() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
