//! # Vizkit Binary
//!
//! Command line entry point. Argument parsing lives here; the command
//! bodies are in [`vizkit::cli`] so integration tests can drive them
//! without spawning the binary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vizkit::cli;

#[derive(Parser)]
#[command(name = "vizkit", version, about = "Chart component helpers: value kinds, clamping, axis labels")]
struct Cli {
    /// Emit a JSON document instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a JSON value into its runtime category
    Kind {
        /// Inline JSON text, e.g. '[1,2,3]'
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        value: Option<String>,

        /// Read the JSON value from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Restrict a number to a closed range
    Clamp {
        /// The number to clamp
        value: f64,
        /// Lower bound (checked first)
        bottom: f64,
        /// Upper bound
        top: f64,
    },

    /// Render a timestamp as an axis label
    Timefmt {
        /// RFC 3339 or `%Y-%m-%dT%H:%M:%S` timestamp
        timestamp: String,

        /// Force one scale: second|minute|hour|day|week|month|year
        #[arg(long, conflicts_with = "adaptive")]
        granularity: Option<String>,

        /// Pick the scale from the instant itself
        #[arg(long)]
        adaptive: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let result = match args.command {
        Command::Kind { value, file } => match (value, file) {
            (_, Some(path)) => cli::cmd_kind_file(&path, args.json),
            (Some(text), None) => cli::cmd_kind(&text, args.json),
            // clap's required_unless_present rules out (None, None)
            (None, None) => unreachable!("clap enforces value or --file"),
        },
        Command::Clamp { value, bottom, top } => cli::cmd_clamp(value, bottom, top, args.json),
        Command::Timefmt {
            timestamp,
            granularity,
            adaptive,
        } => cli::cmd_timefmt(&timestamp, granularity.as_deref(), adaptive, args.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
