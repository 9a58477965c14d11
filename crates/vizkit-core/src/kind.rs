//! # Kind Module
//!
//! Runtime value classification for chart component inputs.
//!
//! Components receive arbitrary JSON values (datum fields, option bags,
//! accessor results) and branch on their category. Rust has no runtime type
//! oracle over arbitrary values, so the classification is an explicit
//! tagged-variant mapping over the concrete [`serde_json::Value`]
//! representation. Every input yields a defined label; there is no error
//! path.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The runtime category of a JSON value.
///
/// Labels are lowercase, single-word strings so they can be matched
/// against option keys and emitted in diagnostics verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// Any JSON number (integer or floating point).
    Number,
    /// A JSON string.
    String,
    /// A JSON array, distinguished from plain key-value mappings.
    Array,
    /// A JSON object (key-value mapping).
    Object,
}

impl ValueKind {
    /// The lowercase label for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value kind: '{0}'")]
pub struct ParseValueKindError(String);

impl FromStr for ValueKind {
    type Err = ParseValueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "bool" => Ok(Self::Bool),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(ParseValueKindError(other.to_string())),
        }
    }
}

/// Classify a JSON value into its runtime category.
///
/// Total over all inputs: absent fields arrive as [`Value::Null`] and
/// classify as [`ValueKind::Null`]. Idempotent and side-effect free.
#[must_use]
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        kind_of(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
