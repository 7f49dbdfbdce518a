//! Raw, percent-denominated portfolio inputs.

use risk_core::types::{Date, MarketScenario, Percent, UnderlyingAsset, ValidationError};

use super::config::{PortfolioConfig, DEFAULT_EXPIRATION};
use crate::payoff::OptionType;

/// The form a user edits before it is normalised into a [`PortfolioConfig`].
///
/// Labels stay as strings and rates stay as percentages so that a bad value
/// surfaces as a [`ValidationError`] kind rather than a deserialisation
/// failure. Missing fields take the dashboard defaults.
///
/// # Examples
///
/// ```rust
/// use risk_models::portfolio::PortfolioInputs;
///
/// let inputs = PortfolioInputs {
///     option_type: "Put".to_string(),
///     volatility_pct: 35.0,
///     scenarios: vec!["High Volatility".to_string(), "Bull Market".to_string()],
///     ..PortfolioInputs::default()
/// };
/// let config = inputs.into_config().unwrap();
/// assert!((config.volatility() - 0.35).abs() < 1e-12);
/// assert_eq!(config.scenarios().len(), 2);
///
/// let bad = PortfolioInputs {
///     scenarios: vec!["Sideways".to_string()],
///     ..PortfolioInputs::default()
/// };
/// assert_eq!(bad.into_config().unwrap_err().kind(), "unknown_scenario");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PortfolioInputs {
    /// Notional amount.
    pub notional: f64,
    /// Underlying asset label, e.g. `"Synthetic Asset A"`.
    pub underlying: String,
    /// `"Call"` or `"Put"`.
    pub option_type: String,
    /// Strike price.
    pub strike: f64,
    /// Expiration date as `YYYY-MM-DD`.
    pub expiration: String,
    /// Volatility in percent.
    pub volatility_pct: f64,
    /// Interest rate in percent.
    pub interest_rate_pct: f64,
    /// Scenario labels, e.g. `"Stable Market"`.
    pub scenarios: Vec<String>,
}

impl Default for PortfolioInputs {
    fn default() -> Self {
        Self {
            notional: 100_000.0,
            underlying: UnderlyingAsset::default().label().to_string(),
            option_type: OptionType::default().label().to_string(),
            strike: 100.0,
            expiration: Date::from(DEFAULT_EXPIRATION).to_string(),
            volatility_pct: 20.0,
            interest_rate_pct: 2.5,
            scenarios: vec![MarketScenario::StableMarket.name().to_string()],
        }
    }
}

impl PortfolioInputs {
    /// Parses labels, normalises percentages and validates.
    ///
    /// # Errors
    ///
    /// - `UnknownAsset`, `UnknownOptionType`, `UnknownScenario` for labels
    ///   outside their closed sets
    /// - `InvalidDate` for an unparseable expiration
    /// - any error from [`PortfolioConfig::validate`]
    pub fn into_config(&self) -> Result<PortfolioConfig, ValidationError> {
        let underlying: UnderlyingAsset = self.underlying.parse()?;
        let option_type: OptionType = self.option_type.parse()?;
        let expiration = Date::parse(&self.expiration)?;
        let scenarios = self
            .scenarios
            .iter()
            .map(|label| label.parse::<MarketScenario>())
            .collect::<Result<Vec<_>, _>>()?;

        PortfolioConfig::builder()
            .notional(self.notional)
            .underlying(underlying)
            .option_type(option_type)
            .strike(self.strike)
            .expiration(expiration)
            .volatility(Percent::new(self.volatility_pct).to_fraction())
            .interest_rate(Percent::new(self.interest_rate_pct).to_fraction())
            .scenarios(scenarios)
            .build()
    }
}

impl From<&PortfolioConfig> for PortfolioInputs {
    fn from(config: &PortfolioConfig) -> Self {
        Self {
            notional: config.notional(),
            underlying: config.underlying().label().to_string(),
            option_type: config.option_type().label().to_string(),
            strike: config.strike(),
            expiration: config.expiration().to_string(),
            volatility_pct: Percent::from_fraction(config.volatility()).value(),
            interest_rate_pct: Percent::from_fraction(config.interest_rate()).value(),
            scenarios: config
                .scenarios()
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
        }
    }
}
