//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Rejected portfolio inputs, scenario names, and sweep settings
//! - `DateError`: Errors from date construction and parsing
//!
//! All validation happens synchronously before any computation runs. There are
//! no transient failure modes, so none of these errors is retryable.

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use risk_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Validation errors raised at the boundary of the assessment functions.
///
/// # Variants
/// - `InvalidStrikePrice`: Strike is non-positive or non-finite
/// - `InvalidVolatility`: Normalised volatility outside (0, 1]
/// - `UnknownScenario`: Scenario label outside the closed enumeration
/// - `InvalidNotional`: Notional is non-positive or non-finite
/// - `InvalidInterestRate`: Interest rate is non-finite
/// - `InvalidSweep`: Price sweep settings cannot produce an increasing grid
/// - `UnknownAsset`: Underlying label outside the closed enumeration
/// - `UnknownOptionType`: Option type label is neither Call nor Put
/// - `InvalidDate`: Expiration date could not be built or parsed
///
/// # Examples
/// ```
/// use risk_core::types::ValidationError;
///
/// let err = ValidationError::InvalidStrikePrice { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// assert_eq!(err.kind(), "invalid_strike_price");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Strike price is not strictly positive.
    #[error("Invalid strike price: K = {strike} (must be positive)")]
    InvalidStrikePrice {
        /// The rejected strike value
        strike: f64,
    },

    /// Volatility lies outside (0, 1] after normalisation.
    #[error("Invalid volatility: sigma = {volatility} (must lie in (0, 1])")]
    InvalidVolatility {
        /// The rejected (normalised) volatility
        volatility: f64,
    },

    /// Scenario label is not one of the four known market scenarios.
    #[error("Unknown market scenario: '{0}'")]
    UnknownScenario(String),

    /// Notional amount is not strictly positive.
    #[error("Invalid notional: N = {notional} (must be positive)")]
    InvalidNotional {
        /// The rejected notional value
        notional: f64,
    },

    /// Interest rate is NaN or infinite.
    #[error("Invalid interest rate: r = {rate} (must be finite, with exp(r) finite)")]
    InvalidInterestRate {
        /// The rejected (normalised) rate
        rate: f64,
    },

    /// Price sweep settings are unusable.
    #[error("Invalid price sweep: {message}")]
    InvalidSweep {
        /// Description of the sweep problem
        message: String,
    },

    /// Underlying asset label is not one of the synthetic assets.
    #[error("Unknown underlying asset: '{0}'")]
    UnknownAsset(String),

    /// Option type label is neither Call nor Put.
    #[error("Unknown option type: '{0}'")]
    UnknownOptionType(String),

    /// Expiration date is invalid.
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

impl ValidationError {
    /// Returns a stable snake_case identifier for this error kind.
    ///
    /// Hosts use this as a machine-readable error code.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidStrikePrice { .. } => "invalid_strike_price",
            ValidationError::InvalidVolatility { .. } => "invalid_volatility",
            ValidationError::UnknownScenario(_) => "unknown_scenario",
            ValidationError::InvalidNotional { .. } => "invalid_notional",
            ValidationError::InvalidInterestRate { .. } => "invalid_interest_rate",
            ValidationError::InvalidSweep { .. } => "invalid_sweep",
            ValidationError::UnknownAsset(_) => "unknown_asset",
            ValidationError::UnknownOptionType(_) => "unknown_option_type",
            ValidationError::InvalidDate(_) => "invalid_date",
        }
    }
}
