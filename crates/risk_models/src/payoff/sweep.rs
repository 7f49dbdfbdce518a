//! Underlying price grid around the strike.

use risk_core::types::ValidationError;

/// Linearly spaced grid of underlying prices, expressed as multiples of the
/// strike.
///
/// The default grid has 100 points from `0.5 × K` to `1.5 × K`, both
/// endpoints included. The last point is pinned to exactly `upper × K` so
/// accumulated rounding never moves the right edge.
///
/// # Examples
/// ```
/// use risk_models::payoff::PriceSweep;
///
/// let prices = PriceSweep::default().sample(100.0).unwrap();
/// assert_eq!(prices.len(), 100);
/// assert_eq!(prices[0], 50.0);
/// assert_eq!(prices[99], 150.0);
///
/// assert!(PriceSweep::default().sample(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PriceSweep {
    points: usize,
    lower_multiple: f64,
    upper_multiple: f64,
}

impl PriceSweep {
    /// Number of samples in the default grid.
    pub const DEFAULT_POINTS: usize = 100;
    /// Lower edge of the default grid, as a multiple of the strike.
    pub const DEFAULT_LOWER_MULTIPLE: f64 = 0.5;
    /// Upper edge of the default grid, as a multiple of the strike.
    pub const DEFAULT_UPPER_MULTIPLE: f64 = 1.5;

    /// Creates a custom grid.
    ///
    /// # Errors
    /// `ValidationError::InvalidSweep` unless `points >= 2` and
    /// `0 < lower_multiple < upper_multiple` with both multiples finite.
    pub fn new(
        points: usize,
        lower_multiple: f64,
        upper_multiple: f64,
    ) -> Result<Self, ValidationError> {
        if points < 2 {
            return Err(ValidationError::InvalidSweep {
                message: format!("need at least 2 points, got {}", points),
            });
        }
        if !lower_multiple.is_finite() || !upper_multiple.is_finite() {
            return Err(ValidationError::InvalidSweep {
                message: "multiples must be finite".to_string(),
            });
        }
        if lower_multiple <= 0.0 || lower_multiple >= upper_multiple {
            return Err(ValidationError::InvalidSweep {
                message: format!(
                    "require 0 < lower < upper, got [{}, {}]",
                    lower_multiple, upper_multiple
                ),
            });
        }

        Ok(Self {
            points,
            lower_multiple,
            upper_multiple,
        })
    }

    /// Returns the number of samples.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the lower multiple of the strike.
    #[inline]
    pub fn lower_multiple(&self) -> f64 {
        self.lower_multiple
    }

    /// Returns the upper multiple of the strike.
    #[inline]
    pub fn upper_multiple(&self) -> f64 {
        self.upper_multiple
    }

    /// Samples the grid around `strike`.
    ///
    /// # Errors
    /// `ValidationError::InvalidStrikePrice` if `strike` is not a positive
    /// finite number, or is so large that the upper end of the range
    /// overflows.
    pub fn sample(&self, strike: f64) -> Result<Vec<f64>, ValidationError> {
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(ValidationError::InvalidStrikePrice { strike });
        }

        let start = self.lower_multiple * strike;
        let stop = self.upper_multiple * strike;
        let last = self.points - 1;
        let step = (stop - start) / last as f64;
        if !(stop.is_finite() && step.is_finite()) {
            return Err(ValidationError::InvalidStrikePrice { strike });
        }

        let mut prices: Vec<f64> = (0..self.points)
            .map(|i| start + i as f64 * step)
            .collect();
        prices[last] = stop;

        Ok(prices)
    }
}

impl Default for PriceSweep {
    fn default() -> Self {
        Self {
            points: Self::DEFAULT_POINTS,
            lower_multiple: Self::DEFAULT_LOWER_MULTIPLE,
            upper_multiple: Self::DEFAULT_UPPER_MULTIPLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overflowing_upper_bound_rejected() {
        let err = PriceSweep::default().sample(1.5e308).unwrap_err();
        assert_eq!(err.kind(), "invalid_strike_price");

        let prices = PriceSweep::default().sample(1.0e308).unwrap();
        assert_eq!(prices[0], 0.5 * 1.0e308);
        assert_eq!(prices[99], 1.5 * 1.0e308);
        assert!(prices.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_default_grid_endpoints() {
        let prices = PriceSweep::default().sample(100.0).unwrap();
        assert_eq!(prices.len(), 100);
        assert_eq!(prices[0], 50.0);
        assert_eq!(prices[99], 150.0);
    }

    #[test]
    fn test_default_grid_step() {
        let prices = PriceSweep::default().sample(99.0).unwrap();
        // step = (1.5 - 0.5) * 99 / 99 = 1.0
        for pair in prices.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_grid_strictly_increasing() {
        let prices = PriceSweep::default().sample(0.37).unwrap();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_grid_symmetric_around_strike() {
        let strike = 250.0;
        let prices = PriceSweep::default().sample(strike).unwrap();
        for i in 0..prices.len() {
            let mirror = prices[prices.len() - 1 - i];
            assert_relative_eq!(prices[i] - strike, strike - mirror, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rejects_non_positive_strike() {
        let sweep = PriceSweep::default();
        assert!(matches!(
            sweep.sample(0.0),
            Err(ValidationError::InvalidStrikePrice { strike }) if strike == 0.0
        ));
        assert!(matches!(
            sweep.sample(-10.0),
            Err(ValidationError::InvalidStrikePrice { .. })
        ));
        assert!(sweep.sample(f64::NAN).is_err());
        assert!(sweep.sample(f64::INFINITY).is_err());
    }

    #[test]
    fn test_custom_sweep() {
        let sweep = PriceSweep::new(3, 0.8, 1.2).unwrap();
        let prices = sweep.sample(10.0).unwrap();
        assert_eq!(prices.len(), 3);
        assert_relative_eq!(prices[0], 8.0);
        assert_relative_eq!(prices[1], 10.0);
        assert_eq!(prices[2], 12.0);
    }

    #[test]
    fn test_invalid_sweeps() {
        assert!(PriceSweep::new(1, 0.5, 1.5).is_err());
        assert!(PriceSweep::new(10, 0.0, 1.5).is_err());
        assert!(PriceSweep::new(10, 1.5, 0.5).is_err());
        assert!(PriceSweep::new(10, 1.0, 1.0).is_err());
        assert!(PriceSweep::new(10, 0.5, f64::INFINITY).is_err());

        let err = PriceSweep::new(0, 0.5, 1.5).unwrap_err();
        assert_eq!(err.kind(), "invalid_sweep");
    }
}
