//! Integration tests for vizkit CLI commands.
//!
//! Uses tempfile for testing file-based inputs.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use std::path::PathBuf;

use tempfile::TempDir;
use vizkit::cli::{CliError, cmd_clamp, cmd_kind, cmd_kind_file, cmd_timefmt, parse_timestamp};
use vizkit::vizkit_core::kind::ValueKind;
use vizkit::vizkit_core::kind_of;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a JSON value file and return its path.
fn create_value_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("value.json");
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// KIND COMMAND TESTS
// =============================================================================

#[test]
fn test_kind_inline_array() {
    assert!(cmd_kind("[1,2,3]", false).is_ok());
}

#[test]
fn test_kind_inline_json_mode() {
    assert!(cmd_kind("{\"a\": 1}", true).is_ok());
}

#[test]
fn test_kind_null_and_scalars() {
    assert!(cmd_kind("null", false).is_ok());
    assert!(cmd_kind("42", false).is_ok());
    assert!(cmd_kind("\"x\"", false).is_ok());
    assert!(cmd_kind("true", false).is_ok());
}

#[test]
fn test_kind_rejects_invalid_json() {
    let result = cmd_kind("not valid json", false);
    assert!(matches!(result, Err(CliError::Json(_))));
}

#[test]
fn test_kind_from_file() {
    let temp = create_temp_dir();
    let path = create_value_file(&temp, "[\"a\", \"b\"]");

    assert!(cmd_kind_file(&path, false).is_ok());
    assert!(cmd_kind_file(&path, true).is_ok());
}

#[test]
fn test_kind_missing_file() {
    let temp = create_temp_dir();
    let path = temp.path().join("nonexistent.json");

    let result = cmd_kind_file(&path, false);
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_kind_file_with_invalid_json() {
    let temp = create_temp_dir();
    let path = create_value_file(&temp, "{broken");

    let result = cmd_kind_file(&path, false);
    assert!(matches!(result, Err(CliError::Json(_))));
}

// The CLI prints whatever the core classifier returns; pin the scenario
// table here so the printed labels cannot drift.
#[test]
fn test_kind_scenarios_match_core() {
    let cases = [
        ("[1,2,3]", ValueKind::Array),
        ("{}", ValueKind::Object),
        ("null", ValueKind::Null),
        ("42", ValueKind::Number),
        ("\"x\"", ValueKind::String),
    ];
    for (text, expected) in cases {
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(kind_of(&value), expected);
        assert!(cmd_kind(text, false).is_ok());
    }
}

// =============================================================================
// CLAMP COMMAND TESTS
// =============================================================================

#[test]
fn test_clamp_in_range() {
    assert!(cmd_clamp(5.0, 0.0, 10.0, false).is_ok());
}

#[test]
fn test_clamp_json_mode() {
    assert!(cmd_clamp(5.0, 0.0, 10.0, true).is_ok());
}

#[test]
fn test_clamp_inverted_bounds() {
    // Unvalidated bounds pass straight through to the helper.
    assert!(cmd_clamp(5.0, 10.0, 0.0, false).is_ok());
}

// =============================================================================
// TIMEFMT COMMAND TESTS
// =============================================================================

#[test]
fn test_timefmt_default_day_minute() {
    assert!(cmd_timefmt("2023-02-14T15:05:00", None, false, false).is_ok());
}

#[test]
fn test_timefmt_rfc3339_input() {
    assert!(cmd_timefmt("2023-02-14T15:05:00Z", None, false, false).is_ok());
    assert!(cmd_timefmt("2023-02-14T15:05:00+05:30", None, false, true).is_ok());
}

#[test]
fn test_timefmt_forced_granularity() {
    assert!(cmd_timefmt("2023-02-14T15:05:07", Some("second"), false, false).is_ok());
    assert!(cmd_timefmt("2023-02-14T15:05:07", Some("year"), false, true).is_ok());
}

#[test]
fn test_timefmt_adaptive() {
    assert!(cmd_timefmt("2023-01-08T00:00:00", None, true, false).is_ok());
}

#[test]
fn test_timefmt_unknown_granularity() {
    let result = cmd_timefmt("2023-02-14T15:05:00", Some("fortnight"), false, false);
    assert!(matches!(result, Err(CliError::Granularity(_))));
}

#[test]
fn test_timefmt_invalid_timestamp() {
    let result = cmd_timefmt("yesterday", None, false, false);
    assert!(matches!(result, Err(CliError::Timestamp { .. })));
}

// =============================================================================
// TIMESTAMP PARSING TESTS
// =============================================================================

#[test]
fn test_parse_timestamp_bare() {
    let t = parse_timestamp("2023-02-14T15:05:00").unwrap();
    assert_eq!(t.to_string(), "2023-02-14 15:05:00");
}

#[test]
fn test_parse_timestamp_rfc3339_keeps_wall_clock() {
    // The offset is dropped; labels render the timestamp's own wall clock.
    let t = parse_timestamp("2023-02-14T15:05:00+05:30").unwrap();
    assert_eq!(t.to_string(), "2023-02-14 15:05:00");
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("not-a-time").is_err());
    assert!(parse_timestamp("").is_err());
}
