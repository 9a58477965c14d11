//! # Vizkit Library
//!
//! This library exposes the vizkit CLI modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export vizkit_core for convenience
pub use vizkit_core;
