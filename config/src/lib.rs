//! # Config Crate
//!
//! Centralized constants for the double-precision vector workspace. Every
//! tolerance and formatting default the vector types rely on is defined
//! here once so the library crates stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{K_EPSILON, DEFAULT_FORMAT_SPECIFIER};
//!
//! // Squared-distance threshold used by vector equality
//! let threshold = K_EPSILON * K_EPSILON;
//! assert!(threshold < 1e-27);
//!
//! assert_eq!(DEFAULT_FORMAT_SPECIFIER, "F2");
//! ```
//!
//! ## Categories
//!
//! - **Precision**: equality and normalization tolerances
//! - **Formatting**: default specifier, digit counts and layout thresholds

pub mod constants;

#[cfg(test)]
mod tests;
