//! Option payoffs and the portfolio-value curve.
//!
//! # Formula
//!
//! For every sampled underlying price `p`:
//!
//! ```text
//! intrinsic = max(0, p - K)            (Call)
//!           = max(0, K - p)            (Put)
//! value     = N * intrinsic * (1 + sigma) * exp(r)
//! ```
//!
//! This is an illustrative scaling, not an option pricing model: there is no
//! time value, and the expiration date plays no part.
//!
//! # Examples
//!
//! ```
//! use risk_models::payoff::{PayoffCurveGenerator, PriceSweep};
//! use risk_models::portfolio::PortfolioConfig;
//!
//! let config = PortfolioConfig::builder().strike(80.0).build().unwrap();
//! let curve = PayoffCurveGenerator::default().generate(&config).unwrap();
//!
//! assert_eq!(curve.len(), PriceSweep::DEFAULT_POINTS);
//! assert_eq!(curve.points()[0].asset_price, 40.0);
//! assert_eq!(curve.points()[99].asset_price, 120.0);
//! ```

mod curve;
mod option_type;
mod sweep;

pub use curve::{
    adjustment_factor, PayoffCurve, PayoffCurveGenerator, PriceValuePoint, CURVE_X_LABEL,
    CURVE_Y_LABEL, STRIKE_LEVEL_LABEL,
};
pub use option_type::OptionType;
pub use sweep::PriceSweep;
