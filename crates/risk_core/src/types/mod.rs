//! Core enumerations, time, and error types.
//!
//! This module provides:
//! - `asset`: Synthetic underlying asset labels
//! - `scenario`: Named market scenarios in canonical order
//! - `percent`: Percentage-to-fraction normalisation
//! - `time`: Calendar `Date` wrapper around chrono::NaiveDate
//! - `error`: Structured validation and date errors
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`UnderlyingAsset`] from `asset`
//! - [`MarketScenario`] from `scenario`
//! - [`Percent`] from `percent`
//! - [`Date`] from `time`
//! - [`ValidationError`], [`DateError`] from `error`

pub mod asset;
pub mod error;
pub mod percent;
pub mod scenario;
pub mod time;

// Re-export commonly used types at module level
pub use asset::UnderlyingAsset;
pub use error::{DateError, ValidationError};
pub use percent::Percent;
pub use scenario::MarketScenario;
pub use time::Date;

/// Folds a user-supplied label into a comparable key.
///
/// Lower-cases, trims, and treats `-` / `_` as spaces so that
/// `"Bull Market"`, `"bull-market"` and `"BULL_MARKET"` all compare equal.
pub(crate) fn label_key(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
