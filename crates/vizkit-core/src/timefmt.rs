//! # Timefmt Module
//!
//! Multi-granularity time formatting for axis labels.
//!
//! Each [`Granularity`] carries the strftime pattern an axis shows at that
//! scale, pinned to the en-US defaults of the formatting stack the chart
//! layer was built against. Two entry points exist:
//!
//! - [`day_minute`] — the fixed label the components emit today: day
//!   formatter + `", "` + minute formatter, unconditionally.
//! - [`adaptive`] — multi-scale selection: format with the finest
//!   granularity boundary the instant does not sit on, the way tick
//!   formatters pick a pattern per tick.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time scale an axis label can be rendered at.
///
/// Ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// `"3:05:07 PM"`
    Second,
    /// `"3:05 PM"`
    Minute,
    /// `"3 PM"`
    Hour,
    /// `"Tue 14"`
    Day,
    /// `"Feb 14"` — used at day scale when the day starts a week.
    Week,
    /// `"February"`
    Month,
    /// `"2023"`
    Year,
}

impl Granularity {
    /// The strftime pattern for this scale.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Second => "%-I:%M:%S %p",
            Self::Minute => "%-I:%M %p",
            Self::Hour => "%-I %p",
            Self::Day => "%a %-d",
            Self::Week => "%b %-d",
            Self::Month => "%B",
            Self::Year => "%Y",
        }
    }

    /// Render `t` with this scale's pattern.
    #[must_use]
    pub fn format(&self, t: &NaiveDateTime) -> String {
        t.format(self.pattern()).to_string()
    }

    /// The lowercase name used on the CLI and in serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown granularity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown granularity: '{0}' (expected second|minute|hour|day|week|month|year)")]
pub struct GranularityError(String);

impl FromStr for Granularity {
    type Err = GranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" => Ok(Self::Second),
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(GranularityError(other.to_string())),
        }
    }
}

/// The fixed day-plus-minute axis label.
///
/// Applies the [`Granularity::Day`] and [`Granularity::Minute`] formatters
/// unconditionally and joins them with `", "`, regardless of the instant's
/// own granularity: `"Tue 14, 3:05 PM"`.
#[must_use]
pub fn day_minute(t: &NaiveDateTime) -> String {
    format!(
        "{}, {}",
        Granularity::Day.format(t),
        Granularity::Minute.format(t)
    )
}

/// Pick the granularity for an instant, tick-formatter style.
///
/// Returns the finest scale whose boundary the instant does not sit on:
/// a nonzero second means second scale, a day boundary inside a month
/// renders as a day (or as a week label when the day starts a week,
/// Sunday here), and only January 1st at midnight collapses to the year.
#[must_use]
pub fn granularity_of(t: &NaiveDateTime) -> Granularity {
    if t.second() != 0 || t.nanosecond() != 0 {
        Granularity::Second
    } else if t.minute() != 0 {
        Granularity::Minute
    } else if t.hour() != 0 {
        Granularity::Hour
    } else if t.day() != 1 {
        if t.weekday() == Weekday::Sun {
            Granularity::Week
        } else {
            Granularity::Day
        }
    } else if t.month() != 1 {
        Granularity::Month
    } else {
        Granularity::Year
    }
}

/// Render `t` at the granularity chosen by [`granularity_of`].
#[must_use]
pub fn adaptive(t: &NaiveDateTime) -> String {
    granularity_of(t).format(t)
}

// =============================================================================
// TESTS
// =============================================================================
