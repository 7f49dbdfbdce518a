//! Validated portfolio configuration and its builder.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use risk_core::types::{Date, MarketScenario, Percent, UnderlyingAsset, ValidationError};

use crate::payoff::{adjustment_factor, OptionType};

/// Default expiration date shown in the dashboard.
pub const DEFAULT_EXPIRATION: NaiveDate = match NaiveDate::from_ymd_opt(2024, 12, 31) {
    Some(date) => date,
    None => panic!("2024-12-31 is a valid calendar date"),
};

/// A single synthetic option position plus the scenarios to chart.
///
/// Immutable once built. Volatility and interest rate are stored as
/// fractions (0.2 for 20%).
///
/// # Examples
///
/// ```rust
/// use risk_models::portfolio::PortfolioConfig;
/// use risk_core::types::MarketScenario;
///
/// let config = PortfolioConfig::builder().build().unwrap();
///
/// assert_eq!(config.notional(), 100_000.0);
/// assert_eq!(config.strike(), 100.0);
/// assert!((config.volatility() - 0.2).abs() < 1e-12);
/// assert!((config.interest_rate() - 0.025).abs() < 1e-12);
/// assert!(config.scenarios().contains(&MarketScenario::StableMarket));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PortfolioConfig {
    #[cfg_attr(feature = "serde", serde(rename = "notionalAmount"))]
    notional: f64,
    #[cfg_attr(feature = "serde", serde(rename = "underlyingAssetName"))]
    underlying: UnderlyingAsset,
    option_type: OptionType,
    #[cfg_attr(feature = "serde", serde(rename = "strikePrice"))]
    strike: f64,
    #[cfg_attr(feature = "serde", serde(rename = "expirationDate"))]
    expiration: Date,
    volatility: f64,
    interest_rate: f64,
    #[cfg_attr(feature = "serde", serde(rename = "selectedScenarios"))]
    scenarios: BTreeSet<MarketScenario>,
}

impl PortfolioConfig {
    /// Creates a builder seeded with the dashboard defaults.
    #[inline]
    pub fn builder() -> PortfolioConfigBuilder {
        PortfolioConfigBuilder::default()
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the underlying asset label.
    #[inline]
    pub fn underlying(&self) -> UnderlyingAsset {
        self.underlying
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the expiration date. Display only.
    #[inline]
    pub fn expiration(&self) -> Date {
        self.expiration
    }

    /// Returns the volatility as a fraction.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the interest rate as a fraction.
    #[inline]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Returns the selected scenarios in canonical order.
    #[inline]
    pub fn scenarios(&self) -> &BTreeSet<MarketScenario> {
        &self.scenarios
    }

    /// Returns a builder pre-filled with this configuration.
    pub fn to_builder(&self) -> PortfolioConfigBuilder {
        PortfolioConfigBuilder {
            notional: self.notional,
            underlying: self.underlying,
            option_type: self.option_type,
            strike: self.strike,
            expiration: self.expiration,
            volatility: self.volatility,
            interest_rate: self.interest_rate,
            scenarios: self.scenarios.clone(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidNotional` if notional is not a positive finite number
    /// - `InvalidStrikePrice` if strike is not a positive finite number
    /// - `InvalidVolatility` if volatility is outside (0, 1]
    /// - `InvalidInterestRate` if the rate is not finite or `exp(rate)`
    ///   overflows
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.notional > 0.0 && self.notional.is_finite()) {
            return Err(ValidationError::InvalidNotional {
                notional: self.notional,
            });
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(ValidationError::InvalidStrikePrice {
                strike: self.strike,
            });
        }
        if !(self.volatility > 0.0 && self.volatility <= 1.0) {
            return Err(ValidationError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !(self.interest_rate.is_finite()
            && adjustment_factor(self.volatility, self.interest_rate).is_finite())
        {
            return Err(ValidationError::InvalidInterestRate {
                rate: self.interest_rate,
            });
        }
        Ok(())
    }
}

/// Builder for [`PortfolioConfig`].
///
/// Starts from the dashboard defaults: notional 100 000, Synthetic Asset A,
/// Call, strike 100, expiry 2024-12-31, volatility 20%, rate 2.5%,
/// scenarios {Stable Market}.
///
/// # Examples
///
/// ```rust
/// use risk_models::payoff::OptionType;
/// use risk_models::portfolio::PortfolioConfig;
///
/// let err = PortfolioConfig::builder().strike(-5.0).build().unwrap_err();
/// assert_eq!(err.kind(), "invalid_strike_price");
///
/// let put = PortfolioConfig::builder()
///     .option_type(OptionType::Put)
///     .volatility_pct(35.0)
///     .build()
///     .unwrap();
/// assert!((put.volatility() - 0.35).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct PortfolioConfigBuilder {
    notional: f64,
    underlying: UnderlyingAsset,
    option_type: OptionType,
    strike: f64,
    expiration: Date,
    volatility: f64,
    interest_rate: f64,
    scenarios: BTreeSet<MarketScenario>,
}

impl Default for PortfolioConfigBuilder {
    fn default() -> Self {
        Self {
            notional: 100_000.0,
            underlying: UnderlyingAsset::default(),
            option_type: OptionType::default(),
            strike: 100.0,
            expiration: Date::from(DEFAULT_EXPIRATION),
            volatility: 0.2,
            interest_rate: 0.025,
            scenarios: BTreeSet::from([MarketScenario::StableMarket]),
        }
    }
}

impl PortfolioConfigBuilder {
    /// Sets the notional amount.
    #[inline]
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = notional;
        self
    }

    /// Sets the underlying asset label.
    #[inline]
    pub fn underlying(mut self, underlying: UnderlyingAsset) -> Self {
        self.underlying = underlying;
        self
    }

    /// Sets the option type.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    /// Sets the expiration date.
    #[inline]
    pub fn expiration(mut self, expiration: Date) -> Self {
        self.expiration = expiration;
        self
    }

    /// Sets the volatility as a fraction in (0, 1].
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the volatility as a percentage (20.0 for 20%).
    #[inline]
    pub fn volatility_pct(self, pct: f64) -> Self {
        self.volatility(Percent::new(pct).to_fraction())
    }

    /// Sets the interest rate as a fraction.
    #[inline]
    pub fn interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = rate;
        self
    }

    /// Sets the interest rate as a percentage (2.5 for 2.5%).
    #[inline]
    pub fn interest_rate_pct(self, pct: f64) -> Self {
        self.interest_rate(Percent::new(pct).to_fraction())
    }

    /// Replaces the scenario selection. Duplicates collapse.
    pub fn scenarios<I>(mut self, scenarios: I) -> Self
    where
        I: IntoIterator<Item = MarketScenario>,
    {
        self.scenarios = scenarios.into_iter().collect();
        self
    }

    /// Adds a scenario if absent, removes it if present.
    pub fn toggle_scenario(mut self, scenario: MarketScenario) -> Self {
        if !self.scenarios.remove(&scenario) {
            self.scenarios.insert(scenario);
        }
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// See [`PortfolioConfig::validate`].
    pub fn build(self) -> Result<PortfolioConfig, ValidationError> {
        let config = PortfolioConfig {
            notional: self.notional,
            underlying: self.underlying,
            option_type: self.option_type,
            strike: self.strike,
            expiration: self.expiration,
            volatility: self.volatility,
            interest_rate: self.interest_rate,
            scenarios: self.scenarios,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_defaults() {
        let config = PortfolioConfig::builder().build().unwrap();

        assert_eq!(config.notional(), 100_000.0);
        assert_eq!(config.underlying(), UnderlyingAsset::SyntheticAssetA);
        assert_eq!(config.option_type(), OptionType::Call);
        assert_eq!(config.strike(), 100.0);
        assert_eq!(config.expiration().to_string(), "2024-12-31");
        assert_relative_eq!(config.volatility(), 0.2);
        assert_relative_eq!(config.interest_rate(), 0.025);
        assert_eq!(
            config.scenarios().iter().copied().collect::<Vec<_>>(),
            vec![MarketScenario::StableMarket]
        );
    }

    #[test]
    fn test_percent_setters_normalise() {
        let config = PortfolioConfig::builder()
            .volatility_pct(45.0)
            .interest_rate_pct(-0.5)
            .build()
            .unwrap();
        assert_relative_eq!(config.volatility(), 0.45);
        assert_relative_eq!(config.interest_rate(), -0.005);
    }

    #[test]
    fn test_invalid_notional() {
        for notional in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = PortfolioConfig::builder()
                .notional(notional)
                .build()
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_notional");
        }
    }

    #[test]
    fn test_invalid_strike() {
        let err = PortfolioConfig::builder().strike(0.0).build().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidStrikePrice { strike } if strike == 0.0));
    }

    #[test]
    fn test_volatility_bounds() {
        assert!(PortfolioConfig::builder().volatility(1.0).build().is_ok());
        assert!(PortfolioConfig::builder().volatility(0.01).build().is_ok());

        for volatility in [0.0, -0.1, 1.01, f64::NAN] {
            let err = PortfolioConfig::builder()
                .volatility(volatility)
                .build()
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_volatility");
        }
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        let err = PortfolioConfig::builder()
            .interest_rate(f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_interest_rate");
    }

    #[test]
    fn test_rate_overflowing_exp_rejected() {
        assert!(PortfolioConfig::builder().interest_rate(709.0).build().is_ok());

        for rate in [710.0, 1.0e6, f64::INFINITY] {
            let err = PortfolioConfig::builder()
                .interest_rate(rate)
                .build()
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_interest_rate");
        }

        let err = PortfolioConfig::builder()
            .interest_rate_pct(71_000.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidInterestRate { rate } if rate == 710.0));
    }

    #[test]
    fn test_large_negative_rate_is_valid() {
        let config = PortfolioConfig::builder().interest_rate(-800.0).build().unwrap();
        assert_eq!(adjustment_factor(config.volatility(), config.interest_rate()), 0.0);
    }

    #[test]
    fn test_notional_checked_before_strike() {
        let err = PortfolioConfig::builder()
            .notional(-1.0)
            .strike(-1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_notional");
    }

    #[test]
    fn test_scenario_selection_collapses_duplicates() {
        let config = PortfolioConfig::builder()
            .scenarios([
                MarketScenario::HighVolatility,
                MarketScenario::BullMarket,
                MarketScenario::HighVolatility,
            ])
            .build()
            .unwrap();
        assert_eq!(
            config.scenarios().iter().copied().collect::<Vec<_>>(),
            vec![MarketScenario::BullMarket, MarketScenario::HighVolatility]
        );
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let config = PortfolioConfig::builder()
            .scenarios(std::iter::empty())
            .build()
            .unwrap();
        assert!(config.scenarios().is_empty());
    }

    #[test]
    fn test_toggle_scenario() {
        let config = PortfolioConfig::builder()
            .toggle_scenario(MarketScenario::StableMarket)
            .toggle_scenario(MarketScenario::BearMarket)
            .build()
            .unwrap();
        assert_eq!(
            config.scenarios().iter().copied().collect::<Vec<_>>(),
            vec![MarketScenario::BearMarket]
        );
    }

    #[test]
    fn test_to_builder_round_trip() {
        let config = PortfolioConfig::builder()
            .strike(42.0)
            .option_type(OptionType::Put)
            .build()
            .unwrap();
        let rebuilt = config.to_builder().build().unwrap();
        assert_eq!(config, rebuilt);
    }
}
