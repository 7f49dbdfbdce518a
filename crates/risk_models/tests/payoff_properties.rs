//! Property-based tests for the price sweep, payoff curve and scenario table.

use std::collections::BTreeSet;

use proptest::prelude::*;
use risk_core::types::{MarketScenario, ValidationError};
use risk_models::payoff::{OptionType, PayoffCurveGenerator, PriceSweep};
use risk_models::portfolio::PortfolioConfig;
use risk_models::scenarios::ScenarioRiskTable;

fn strike_strategy() -> impl Strategy<Value = f64> {
    0.01..10_000.0
}

/// Strikes whose sweep still fits in an `f64`.
fn large_strike_strategy() -> impl Strategy<Value = f64> {
    1.0e300..1.19e308
}

fn option_type_strategy() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

fn scenario_strategy() -> impl Strategy<Value = MarketScenario> {
    (0..MarketScenario::ALL.len()).prop_map(|i| MarketScenario::ALL[i])
}

fn config(
    option_type: OptionType,
    strike: f64,
    notional: f64,
    volatility: f64,
    rate: f64,
) -> PortfolioConfig {
    PortfolioConfig::builder()
        .option_type(option_type)
        .strike(strike)
        .notional(notional)
        .volatility(volatility)
        .interest_rate(rate)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn sweep_has_fixed_shape(strike in strike_strategy()) {
        let prices = PriceSweep::default().sample(strike).unwrap();

        prop_assert_eq!(prices.len(), 100);
        prop_assert_eq!(prices[0], 0.5 * strike);
        prop_assert_eq!(prices[99], 1.5 * strike);
        prop_assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn non_positive_strike_is_rejected(strike in -10_000.0..=0.0_f64) {
        let result = PriceSweep::default().sample(strike);
        prop_assert!(result.is_err());
        prop_assert_eq!(result.unwrap_err().kind(), "invalid_strike_price");
    }

    #[test]
    fn values_are_never_negative(
        option_type in option_type_strategy(),
        strike in strike_strategy(),
        notional in 1.0..10_000_000.0_f64,
        volatility in 0.01..=1.0_f64,
        rate in -0.1..0.2_f64,
    ) {
        let curve = PayoffCurveGenerator::default()
            .generate(&config(option_type, strike, notional, volatility, rate))
            .unwrap();
        prop_assert_eq!(curve.len(), 100);
        prop_assert!(curve.values().all(|v| v >= 0.0));
    }

    #[test]
    fn call_is_zero_below_strike_and_non_decreasing(
        strike in strike_strategy(),
        volatility in 0.01..=1.0_f64,
    ) {
        let curve = PayoffCurveGenerator::default()
            .generate(&config(OptionType::Call, strike, 100_000.0, volatility, 0.025))
            .unwrap();

        for point in curve.points().iter().filter(|p| p.asset_price <= strike) {
            prop_assert_eq!(point.portfolio_value, 0.0);
        }
        let values: Vec<f64> = curve.values().collect();
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn put_is_zero_above_strike_and_non_increasing(
        strike in strike_strategy(),
        volatility in 0.01..=1.0_f64,
    ) {
        let curve = PayoffCurveGenerator::default()
            .generate(&config(OptionType::Put, strike, 100_000.0, volatility, 0.025))
            .unwrap();

        for point in curve.points().iter().filter(|p| p.asset_price >= strike) {
            prop_assert_eq!(point.portfolio_value, 0.0);
        }
        let values: Vec<f64> = curve.values().collect();
        prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn overflowing_strike_is_rejected(strike in 1.2e308..=f64::MAX) {
        let result = PriceSweep::default().sample(strike);
        let is_invalid_strike = matches!(result, Err(ValidationError::InvalidStrikePrice { .. }));
        prop_assert!(is_invalid_strike);
    }

    #[test]
    fn large_strike_sweep_stays_finite(strike in large_strike_strategy()) {
        let prices = PriceSweep::default().sample(strike).unwrap();

        prop_assert_eq!(prices[0], 0.5 * strike);
        prop_assert_eq!(prices[99], 1.5 * strike);
        prop_assert!(prices.iter().all(|p| p.is_finite()));
        prop_assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn large_inputs_give_finite_values_or_an_error(
        option_type in option_type_strategy(),
        strike in large_strike_strategy(),
        notional in 1.0..1.0e6_f64,
        rate in -1.0..5.0_f64,
    ) {
        let config = config(option_type, strike, notional, 0.2, rate);
        match PayoffCurveGenerator::default().generate(&config) {
            Ok(curve) => {
                prop_assert_eq!(curve.len(), 100);
                prop_assert!(curve.values().all(|v| v.is_finite() && v >= 0.0));
            }
            Err(err) => prop_assert_eq!(err.kind(), "invalid_notional"),
        }
    }

    #[test]
    fn rate_near_exp_limit_is_rejected_or_finite(
        option_type in option_type_strategy(),
        rate in 700.0..720.0_f64,
    ) {
        let built = PortfolioConfig::builder()
            .option_type(option_type)
            .notional(1.0)
            .strike(1.0)
            .interest_rate(rate)
            .build();

        match built {
            Ok(config) => {
                let curve = PayoffCurveGenerator::default().generate(&config).unwrap();
                prop_assert!(curve.values().all(|v| v.is_finite() && v >= 0.0));
            }
            Err(err) => {
                prop_assert!(rate > 709.0);
                prop_assert_eq!(err.kind(), "invalid_interest_rate");
            }
        }
    }

    #[test]
    fn scenario_lookup_is_canonical_and_deduplicated(
        selection in prop::collection::vec(scenario_strategy(), 0..10),
    ) {
        let entries = ScenarioRiskTable::lookup(selection.iter().copied());
        let unique: BTreeSet<_> = selection.iter().copied().collect();

        prop_assert_eq!(entries.len(), unique.len());
        prop_assert!(entries
            .windows(2)
            .all(|w| w[0].scenario.canonical_index() < w[1].scenario.canonical_index()));
        for entry in &entries {
            prop_assert_eq!(entry.risk_level, ScenarioRiskTable::risk_level(entry.scenario));
        }

        let mut reversed = selection.clone();
        reversed.reverse();
        prop_assert_eq!(ScenarioRiskTable::lookup(reversed), entries);
    }
}
