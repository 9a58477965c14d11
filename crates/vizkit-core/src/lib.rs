//! # Vizkit Core
//!
//! Pure helper functions for the vizkit chart component layer:
//!
//! - [`kind`] — classify a runtime JSON value into a lowercase category name
//! - [`clamp`] — restrict a number to a closed range
//! - [`timefmt`] — multi-granularity time formatters for axis labels
//!
//! Every function here is a stateless, synchronous mapping from input to
//! output. File I/O and CLI concerns live in the app layer (apps/vizkit).

pub mod clamp;
pub mod kind;
pub mod timefmt;

pub use clamp::clamp;
pub use kind::{ValueKind, kind_of};
pub use timefmt::{Granularity, GranularityError, adaptive, day_minute, granularity_of};
