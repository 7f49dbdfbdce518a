//! Portfolio configuration.
//!
//! - [`PortfolioConfig`]: validated, immutable value object consumed by the
//!   payoff and scenario computations
//! - [`PortfolioConfigBuilder`]: fluent construction seeded with the
//!   dashboard defaults
//! - [`PortfolioInputs`]: the raw, percent-denominated form a user edits

mod config;
mod inputs;

pub use config::{PortfolioConfig, PortfolioConfigBuilder, DEFAULT_EXPIRATION};
pub use inputs::PortfolioInputs;
