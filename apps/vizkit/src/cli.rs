//! # CLI Module
//!
//! Command implementations for the vizkit binary.
//!
//! Each `cmd_*` function is the body of one subcommand: it parses its
//! textual inputs, calls the pure helper in vizkit-core, and prints the
//! result to stdout (plain text, or a JSON document when `json` is set).
//! The functions are public so integration tests can call them directly.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use serde_json::{Value, json};
use tracing::debug;
use vizkit_core::clamp::clamp;
use vizkit_core::kind::kind_of;
use vizkit_core::timefmt::{self, Granularity, GranularityError};

/// Errors surfaced by the CLI commands.
///
/// The core helpers are total; everything here comes from reading or
/// parsing the textual inputs.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading a `--file` input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a valid JSON value.
    #[error("invalid JSON value: {0}")]
    Json(#[from] serde_json::Error),

    /// The timestamp matched neither RFC 3339 nor `%Y-%m-%dT%H:%M:%S`.
    #[error("invalid timestamp '{input}': {source}")]
    Timestamp {
        input: String,
        source: chrono::ParseError,
    },

    /// An unknown `--granularity` name.
    #[error(transparent)]
    Granularity(#[from] GranularityError),
}

// =============================================================================
// KIND COMMAND
// =============================================================================

/// Classify an inline JSON value and print its category.
pub fn cmd_kind(text: &str, json: bool) -> Result<(), CliError> {
    let value: Value = serde_json::from_str(text)?;
    print_kind(&value, json);
    Ok(())
}

/// Classify the JSON value stored in `path` and print its category.
pub fn cmd_kind_file(path: &Path, json: bool) -> Result<(), CliError> {
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    print_kind(&value, json);
    Ok(())
}

fn print_kind(value: &Value, json: bool) {
    let kind = kind_of(value);
    debug!(kind = kind.as_str(), "classified value");
    if json {
        println!("{}", json!({ "kind": kind }));
    } else {
        println!("{kind}");
    }
}

// =============================================================================
// CLAMP COMMAND
// =============================================================================

/// Clamp `value` to `[bottom, top]` and print the result.
///
/// Bounds are passed through unvalidated, matching the helper's
/// lower-bound-first semantics.
pub fn cmd_clamp(value: f64, bottom: f64, top: f64, json: bool) -> Result<(), CliError> {
    let clamped = clamp(value, bottom, top);
    debug!(value, bottom, top, clamped, "clamped value");
    if json {
        println!(
            "{}",
            json!({
                "value": value,
                "bottom": bottom,
                "top": top,
                "clamped": clamped,
            })
        );
    } else {
        println!("{clamped}");
    }
    Ok(())
}

// =============================================================================
// TIMEFMT COMMAND
// =============================================================================

/// Render a timestamp as an axis label.
///
/// Default output is the fixed day-plus-minute label. `granularity` forces
/// a single scale; `adaptive` picks the scale from the instant itself.
pub fn cmd_timefmt(
    timestamp: &str,
    granularity: Option<&str>,
    adaptive: bool,
    json: bool,
) -> Result<(), CliError> {
    let t = parse_timestamp(timestamp)?;

    let (label, scale) = if let Some(name) = granularity {
        let g: Granularity = name.parse()?;
        (g.format(&t), Some(g))
    } else if adaptive {
        let g = timefmt::granularity_of(&t);
        (g.format(&t), Some(g))
    } else {
        (timefmt::day_minute(&t), None)
    };

    debug!(%t, ?scale, "formatted timestamp");
    if json {
        println!("{}", json!({ "label": label, "granularity": scale }));
    } else {
        println!("{label}");
    }
    Ok(())
}

/// Parse an RFC 3339 timestamp, falling back to a bare `%Y-%m-%dT%H:%M:%S`.
///
/// RFC 3339 offsets are dropped: axis labels are rendered in the
/// timestamp's own wall-clock time.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, CliError> {
    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t.naive_local());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S").map_err(|source| {
        CliError::Timestamp {
            input: input.to_string(),
            source,
        }
    })
}
