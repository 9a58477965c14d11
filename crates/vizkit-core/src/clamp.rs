//! # Clamp Module
//!
//! Closed-range restriction for axis domains and pixel coordinates.
//!
//! The bounds are taken as given: the function does not validate that
//! `bottom <= top`. The lower-bound check runs first, then the upper-bound
//! check, so with inverted bounds the upper bound wins. Callers that need
//! ordered bounds must order them; see the tests for the pinned behavior.

/// Restrict `value` to the closed range `[bottom, top]`.
///
/// Returns `value` unchanged when it already lies within the range,
/// otherwise the bound it violates. Checks are sequential — lower bound
/// first — and comparisons that return false (NaN anywhere) leave the
/// value untouched.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, bottom: T, top: T) -> T {
    let value = if value < bottom { bottom } else { value };
    if value > top { top } else { value }
}

// =============================================================================
// TESTS
// =============================================================================
