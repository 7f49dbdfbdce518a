//! Portfolio value curve across the price sweep.

use super::{OptionType, PriceSweep};
use crate::portfolio::PortfolioConfig;
use risk_core::types::ValidationError;

/// X-axis label of the curve chart.
pub const CURVE_X_LABEL: &str = "Underlying Asset Price";

/// Y-axis label of the curve chart.
pub const CURVE_Y_LABEL: &str = "Portfolio Value";

/// Annotation drawn at [`PayoffCurve::strike_marker_level`].
pub const STRIKE_LEVEL_LABEL: &str = "Strike Price Level";

/// Multiplier applied to the intrinsic payoff: `(1 + sigma) * exp(r)`.
///
/// # Arguments
/// * `volatility` - Volatility as a fraction (0.2 for 20%)
/// * `interest_rate` - Interest rate as a fraction (0.025 for 2.5%)
///
/// # Examples
/// ```
/// use risk_models::payoff::adjustment_factor;
///
/// assert_eq!(adjustment_factor(0.0, 0.0), 1.0);
/// assert!((adjustment_factor(0.2, 0.0) - 1.2).abs() < 1e-12);
/// ```
#[inline]
pub fn adjustment_factor(volatility: f64, interest_rate: f64) -> f64 {
    (1.0 + volatility) * interest_rate.exp()
}

/// A single sample of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PriceValuePoint {
    /// Underlying price p.
    pub asset_price: f64,
    /// Illustrative portfolio value at p.
    pub portfolio_value: f64,
}

/// Ordered price/value samples for one configuration.
///
/// Points are ordered by strictly increasing `asset_price`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PayoffCurve {
    option_type: OptionType,
    strike: f64,
    points: Vec<PriceValuePoint>,
}

impl PayoffCurve {
    /// Returns the option type the curve was generated for.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike the curve was generated for.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the samples in ascending price order.
    #[inline]
    pub fn points(&self) -> &[PriceValuePoint] {
        &self.points
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the curve has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the sampled prices.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.asset_price)
    }

    /// Iterates over the sampled values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.portfolio_value)
    }

    /// Returns the largest portfolio value on the curve, or 0 when empty.
    pub fn max_value(&self) -> f64 {
        self.values().fold(0.0, f64::max)
    }

    /// Height at which the strike annotation is drawn: 90% of the maximum value.
    pub fn strike_marker_level(&self) -> f64 {
        0.9 * self.max_value()
    }

    /// Chart title, e.g. `"Call Option Portfolio Value Sensitivity"`.
    pub fn title(&self) -> String {
        format!("{} Option Portfolio Value Sensitivity", self.option_type)
    }

    /// Annotation for the vertical strike marker, e.g. `"Strike Price: 100.0"`.
    pub fn strike_label(&self) -> String {
        if self.strike.fract() == 0.0 {
            format!("Strike Price: {:.1}", self.strike)
        } else {
            format!("Strike Price: {}", self.strike)
        }
    }

    /// Consumes the curve and returns its samples.
    pub fn into_points(self) -> Vec<PriceValuePoint> {
        self.points
    }
}

/// Generates a [`PayoffCurve`] from a validated [`PortfolioConfig`].
///
/// # Examples
/// ```
/// use risk_models::payoff::{OptionType, PayoffCurveGenerator};
/// use risk_models::portfolio::PortfolioConfig;
///
/// let config = PortfolioConfig::builder()
///     .option_type(OptionType::Put)
///     .strike(100.0)
///     .build()
///     .unwrap();
/// let curve = PayoffCurveGenerator::new().generate(&config).unwrap();
///
/// // Puts are worth most at the low end of the sweep.
/// let first = curve.points()[0].portfolio_value;
/// let last = curve.points()[curve.len() - 1].portfolio_value;
/// assert!(first > 0.0);
/// assert_eq!(last, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PayoffCurveGenerator {
    sweep: PriceSweep,
}

impl PayoffCurveGenerator {
    /// Creates a generator using the default 100-point sweep.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator using a custom sweep.
    pub fn with_sweep(sweep: PriceSweep) -> Self {
        Self { sweep }
    }

    /// Returns the price sweep.
    #[inline]
    pub fn sweep(&self) -> &PriceSweep {
        &self.sweep
    }

    /// Computes the curve for `config`.
    ///
    /// # Errors
    /// - `ValidationError::InvalidStrikePrice` if the strike is not positive
    ///   or the sweep around it overflows
    /// - `ValidationError::InvalidInterestRate` if the adjustment factor is
    ///   not finite
    /// - `ValidationError::InvalidNotional` if scaling by the notional
    ///   overflows
    pub fn generate(&self, config: &PortfolioConfig) -> Result<PayoffCurve, ValidationError> {
        let strike = config.strike();
        let prices = self.sweep.sample(strike)?;

        let option_type = config.option_type();
        let notional = config.notional();
        let rate = config.interest_rate();
        let factor = adjustment_factor(config.volatility(), rate);
        if !factor.is_finite() {
            return Err(ValidationError::InvalidInterestRate { rate });
        }

        let points: Vec<PriceValuePoint> = prices
            .into_iter()
            .map(|asset_price| {
                let adjusted = option_type.intrinsic(asset_price, strike) * factor;
                PriceValuePoint {
                    asset_price,
                    portfolio_value: notional * adjusted,
                }
            })
            .collect();

        if points.iter().any(|p| !p.portfolio_value.is_finite()) {
            return Err(ValidationError::InvalidNotional { notional });
        }

        Ok(PayoffCurve {
            option_type,
            strike,
            points,
        })
    }
}
