//! Sidebar input form.
//!
//! Holds the user's current inputs in typed form and applies the step sizes
//! of each control. Converting to a [`PortfolioConfig`] is where validation
//! happens; the form itself accepts any value the steps reach.

use std::collections::BTreeSet;

use risk_core::types::{Date, MarketScenario, Percent, UnderlyingAsset, ValidationError};
use risk_models::payoff::OptionType;
use risk_models::portfolio::{PortfolioConfig, DEFAULT_EXPIRATION};

/// Notional step
pub const NOTIONAL_STEP: f64 = 10_000.0;
/// Strike step
pub const STRIKE_STEP: f64 = 1.0;
/// Volatility step, in percent
pub const VOLATILITY_STEP_PCT: f64 = 1.0;
/// Volatility slider range, in percent
pub const VOLATILITY_RANGE_PCT: (f64, f64) = (1.0, 50.0);
/// Interest rate step, in percent
pub const RATE_STEP_PCT: f64 = 0.1;

/// Editable fields, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Notional amount
    Notional,
    /// Underlying asset
    Underlying,
    /// Call or Put
    OptionType,
    /// Strike price
    Strike,
    /// Expiration date
    Expiration,
    /// Volatility (%)
    Volatility,
    /// Interest rate (%)
    InterestRate,
    /// Scenario multi-select
    Scenarios,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 8] = [
        Field::Notional,
        Field::Underlying,
        Field::OptionType,
        Field::Strike,
        Field::Expiration,
        Field::Volatility,
        Field::InterestRate,
        Field::Scenarios,
    ];

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Notional => "Notional Amount",
            Field::Underlying => "Underlying Asset",
            Field::OptionType => "Option Type",
            Field::Strike => "Strike Price",
            Field::Expiration => "Expiration Date",
            Field::Volatility => "Volatility (%)",
            Field::InterestRate => "Interest Rate (%)",
            Field::Scenarios => "Market Scenarios",
        }
    }

    /// Help line shown under the form for the selected field
    pub fn help(&self) -> &'static str {
        match self {
            Field::Notional => "Total notional value of the derivative portfolio.",
            Field::Underlying => "Underlying asset for the derivative contract.",
            Field::OptionType => "Call (right to buy) or Put (right to sell).",
            Field::Strike => "Strike price of the option contract.",
            Field::Expiration => "Expiration date of the option contract.",
            Field::Volatility => "Higher volatility increases uncertainty.",
            Field::InterestRate => "Risk-free interest rate.",
            Field::Scenarios => "Scenarios to assess portfolio risk under.",
        }
    }

    fn index(&self) -> usize {
        Field::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Field below this one, stopping at the last
    pub fn next(self) -> Self {
        Field::ALL[(self.index() + 1).min(Field::ALL.len() - 1)]
    }

    /// Field above this one, stopping at the first
    pub fn previous(self) -> Self {
        Field::ALL[self.index().saturating_sub(1)]
    }
}

/// Current form values
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioForm {
    /// Notional amount
    pub notional: f64,
    /// Underlying asset
    pub underlying: UnderlyingAsset,
    /// Option type
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Expiration date
    pub expiration: Date,
    /// Volatility in percent
    pub volatility_pct: f64,
    /// Interest rate in percent
    pub interest_rate_pct: f64,
    /// Selected scenarios
    pub scenarios: BTreeSet<MarketScenario>,
    /// Scenario under the cursor in the multi-select
    pub scenario_cursor: usize,
}

impl Default for PortfolioForm {
    fn default() -> Self {
        Self {
            notional: 100_000.0,
            underlying: UnderlyingAsset::default(),
            option_type: OptionType::default(),
            strike: 100.0,
            expiration: Date::from(DEFAULT_EXPIRATION),
            volatility_pct: 20.0,
            interest_rate_pct: 2.5,
            scenarios: BTreeSet::from([MarketScenario::StableMarket]),
            scenario_cursor: 0,
        }
    }
}

impl From<&PortfolioConfig> for PortfolioForm {
    fn from(config: &PortfolioConfig) -> Self {
        Self {
            notional: config.notional(),
            underlying: config.underlying(),
            option_type: config.option_type(),
            strike: config.strike(),
            expiration: config.expiration(),
            volatility_pct: round_to(Percent::from_fraction(config.volatility()).value(), 1),
            interest_rate_pct: round_to(Percent::from_fraction(config.interest_rate()).value(), 2),
            scenarios: config.scenarios().clone(),
            scenario_cursor: 0,
        }
    }
}

impl PortfolioForm {
    /// Validates the form into a configuration.
    pub fn to_config(&self) -> Result<PortfolioConfig, ValidationError> {
        PortfolioConfig::builder()
            .notional(self.notional)
            .underlying(self.underlying)
            .option_type(self.option_type)
            .strike(self.strike)
            .expiration(self.expiration)
            .volatility_pct(self.volatility_pct)
            .interest_rate_pct(self.interest_rate_pct)
            .scenarios(self.scenarios.iter().copied())
            .build()
    }

    /// Scenario under the multi-select cursor
    pub fn cursor_scenario(&self) -> MarketScenario {
        MarketScenario::ALL[self.scenario_cursor.min(MarketScenario::ALL.len() - 1)]
    }

    /// Applies one left (`-1`) or right (`+1`) step to `field`.
    ///
    /// Returns whether an input value changed. Moving the scenario cursor
    /// does not count as a change.
    pub fn step(&mut self, field: Field, direction: i8) -> bool {
        let sign = f64::from(direction.signum());
        match field {
            Field::Notional => {
                self.notional += sign * NOTIONAL_STEP;
                true
            }
            Field::Underlying => {
                self.underlying = if direction < 0 {
                    self.underlying.previous()
                } else {
                    self.underlying.next()
                };
                true
            }
            Field::OptionType => {
                self.option_type = self.option_type.toggle();
                true
            }
            Field::Strike => {
                self.strike = round_to(self.strike + sign * STRIKE_STEP, 6);
                true
            }
            Field::Expiration => match self.expiration.add_days(i64::from(direction.signum())) {
                Some(date) => {
                    self.expiration = date;
                    true
                }
                None => false,
            },
            Field::Volatility => {
                let (lo, hi) = VOLATILITY_RANGE_PCT;
                let next = (self.volatility_pct + sign * VOLATILITY_STEP_PCT).clamp(lo, hi);
                let changed = next != self.volatility_pct;
                self.volatility_pct = next;
                changed
            }
            Field::InterestRate => {
                self.interest_rate_pct = round_to(self.interest_rate_pct + sign * RATE_STEP_PCT, 2);
                true
            }
            Field::Scenarios => {
                let last = MarketScenario::ALL.len() - 1;
                self.scenario_cursor = if direction < 0 {
                    self.scenario_cursor.saturating_sub(1)
                } else {
                    (self.scenario_cursor + 1).min(last)
                };
                false
            }
        }
    }

    /// Space / Enter on `field`: toggles a scenario or cycles an enum.
    ///
    /// Returns whether an input value changed.
    pub fn activate(&mut self, field: Field) -> bool {
        match field {
            Field::Scenarios => {
                let scenario = self.cursor_scenario();
                if !self.scenarios.remove(&scenario) {
                    self.scenarios.insert(scenario);
                }
                true
            }
            Field::Underlying | Field::OptionType => self.step(field, 1),
            _ => false,
        }
    }

    /// Display text of `field`
    pub fn display(&self, field: Field) -> String {
        match field {
            Field::Notional => format!("{:.0}", self.notional),
            Field::Underlying => self.underlying.label().to_string(),
            Field::OptionType => self.option_type.description().to_string(),
            Field::Strike => format!("{:.2}", self.strike),
            Field::Expiration => self.expiration.to_string(),
            Field::Volatility => format!("{:.0}", self.volatility_pct),
            Field::InterestRate => format!("{:.2}", self.interest_rate_pct),
            Field::Scenarios => {
                if self.scenarios.is_empty() {
                    "(none)".to_string()
                } else {
                    self.scenarios
                        .iter()
                        .map(|s| s.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
        }
    }
}

/// Rounds to `decimals` places so repeated steps do not drift.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
