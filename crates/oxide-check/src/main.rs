//! oxide-check CLI
//!
//! Command-line tool for checking filter predicates and TIME literals.

mod report;

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::report::{ParseReport, Report, TimeReport};

/// Checks filter predicates and SQL TIME literals.
#[derive(Parser)]
#[command(name = "oxide-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(
        short,
        long,
        value_enum,
        env = "OXIDE_CHECK_FORMAT",
        default_value_t = Format::Text,
        global = true
    )]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable output.
    Text,
    /// A JSON report on stdout.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a predicate and print its canonical form.
    Parse {
        /// The predicate, e.g. "'Count' > ? AND $ = ?".
        expr: String,
    },

    /// Decode a TIME literal and print its canonical form.
    ///
    /// An empty value or `null` is accepted as NULL.
    Time {
        /// The literal, e.g. "9:05:00".
        value: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON reports on stdout stay machine-readable.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!(format = ?cli.format, "starting check");

    match cli.command {
        Commands::Parse { expr } => emit(&ParseReport::new(&expr), cli.format),
        Commands::Time { value } => emit(&TimeReport::new(&value), cli.format),
    }
}

fn emit(report: &impl Report, format: Format) -> anyhow::Result<ExitCode> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
        Format::Text if report.ok() => println!("{}", report.to_text()),
        Format::Text => eprintln!("{}", report.to_text()),
    }

    if report.ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        debug!("check failed");
        Ok(ExitCode::FAILURE)
    }
}
