//! Percentage inputs.
//!
//! Volatility and interest rate are entered as percentages (`20.0` meaning
//! 20 %) and normalised to fractions before they reach any formula.

use std::fmt;

/// A value expressed in percent.
///
/// # Examples
///
/// ```
/// use risk_core::types::Percent;
///
/// let rate = Percent::new(2.5);
/// assert!((rate.to_fraction() - 0.025).abs() < 1e-15);
/// assert_eq!(Percent::from_fraction(0.2).value(), 20.0);
/// assert_eq!(format!("{}", rate), "2.5%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Percent(f64);

impl Percent {
    /// Wraps a percentage value (e.g. `20.0` for 20 %).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Builds a percentage from a fraction (e.g. `0.2` becomes 20 %).
    #[inline]
    pub fn from_fraction(fraction: f64) -> Self {
        Percent(fraction * 100.0)
    }

    /// Returns the raw percentage value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the value divided by 100.
    #[inline]
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Percent(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_fraction() {
        assert_relative_eq!(Percent::new(20.0).to_fraction(), 0.2, epsilon = 1e-15);
        assert_relative_eq!(Percent::new(100.0).to_fraction(), 1.0, epsilon = 1e-15);
        assert_eq!(Percent::new(0.0).to_fraction(), 0.0);
    }

    #[test]
    fn test_negative_percent_is_preserved() {
        assert_relative_eq!(Percent::new(-0.5).to_fraction(), -0.005, epsilon = 1e-15);
    }

    #[test]
    fn test_fraction_round_trip() {
        let pct = Percent::from_fraction(0.025);
        assert_relative_eq!(pct.value(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(pct.to_fraction(), 0.025, epsilon = 1e-15);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_fraction_round_trip_holds(fraction in -10.0..10.0_f64) {
                let pct = Percent::from_fraction(fraction);
                assert_relative_eq!(pct.to_fraction(), fraction, epsilon = 1e-12);
                assert_relative_eq!(pct.value(), fraction * 100.0, epsilon = 1e-10);
            }

            #[test]
            fn test_sign_is_preserved(value in -1_000.0..1_000.0_f64) {
                prop_assume!(value.abs() > 1e-300);
                let fraction = Percent::from(value).to_fraction();
                prop_assert_eq!(fraction < 0.0, value < 0.0);
                prop_assert!(fraction.abs() <= value.abs());
            }
        }
    }
}
