//! End-to-end checks across configuration, curve and scenario table.

use approx::assert_relative_eq;
use risk_core::types::MarketScenario;
use risk_models::assessment::assess;
use risk_models::payoff::{adjustment_factor, OptionType};
use risk_models::portfolio::{PortfolioConfig, PortfolioInputs};
use risk_models::scenarios::ScenarioRiskTable;

#[test]
fn test_reference_call_value_at_upper_edge() {
    let config = PortfolioConfig::builder()
        .notional(100_000.0)
        .strike(100.0)
        .option_type(OptionType::Call)
        .volatility(0.20)
        .interest_rate(0.025)
        .build()
        .unwrap();

    let assessment = assess(&config).unwrap();
    let last = assessment.curve.points()[99];

    let expected = 100_000.0 * 50.0 * 1.2 * 0.025_f64.exp();
    assert_eq!(last.asset_price, 150.0);
    assert_relative_eq!(last.portfolio_value, expected, max_relative = 1e-12);
    assert_relative_eq!(
        last.portfolio_value,
        100_000.0 * 50.0 * adjustment_factor(0.2, 0.025),
        max_relative = 1e-12
    );
}

#[test]
fn test_call_and_put_zero_at_strike() {
    // 99 intervals over [0.5K, 1.5K] put no sample exactly on K; use 3 points.
    use risk_models::payoff::{PayoffCurveGenerator, PriceSweep};

    let generator = PayoffCurveGenerator::with_sweep(PriceSweep::new(3, 0.5, 1.5).unwrap());
    for option_type in OptionType::ALL {
        let config = PortfolioConfig::builder()
            .option_type(option_type)
            .strike(100.0)
            .build()
            .unwrap();
        let curve = generator.generate(&config).unwrap();
        assert_eq!(curve.points()[1].asset_price, 100.0);
        assert_eq!(curve.points()[1].portfolio_value, 0.0);
    }
}

#[test]
fn test_scenarios_follow_canonical_order() {
    let config = PortfolioConfig::builder()
        .scenarios([MarketScenario::StableMarket, MarketScenario::BullMarket])
        .build()
        .unwrap();
    let assessment = assess(&config).unwrap();

    let rows: Vec<_> = assessment
        .scenario_risks
        .iter()
        .map(|e| (e.scenario, e.risk_level))
        .collect();
    assert_eq!(
        rows,
        vec![
            (MarketScenario::BullMarket, 0.2),
            (MarketScenario::StableMarket, 0.1),
        ]
    );
}

#[test]
fn test_unknown_scenario_from_inputs() {
    let inputs = PortfolioInputs {
        scenarios: vec!["Bull Market".to_string(), "Meltdown".to_string()],
        ..PortfolioInputs::default()
    };
    assert_eq!(inputs.into_config().unwrap_err().kind(), "unknown_scenario");
    assert!(ScenarioRiskTable::lookup_names(["Meltdown"]).is_err());
}

#[test]
fn test_expiration_does_not_affect_curve() {
    let early = PortfolioInputs {
        expiration: "2024-01-01".to_string(),
        ..PortfolioInputs::default()
    };
    let late = PortfolioInputs {
        expiration: "2030-06-30".to_string(),
        ..PortfolioInputs::default()
    };

    let a = assess(&early.into_config().unwrap()).unwrap();
    let b = assess(&late.into_config().unwrap()).unwrap();
    assert_eq!(a.curve, b.curve);
}

#[test]
fn test_asset_label_does_not_affect_curve() {
    let a = PortfolioInputs {
        underlying: "Synthetic Asset A".to_string(),
        ..PortfolioInputs::default()
    };
    let c = PortfolioInputs {
        underlying: "Synthetic Asset C".to_string(),
        ..PortfolioInputs::default()
    };
    assert_eq!(
        assess(&a.into_config().unwrap()).unwrap().curve,
        assess(&c.into_config().unwrap()).unwrap().curve
    );
}

#[test]
fn test_assessment_serialises_camel_case() {
    let config = PortfolioConfig::builder().build().unwrap();
    let json = serde_json::to_value(assess(&config).unwrap()).unwrap();

    assert_eq!(json["config"]["strikePrice"], 100.0);
    assert_eq!(json["config"]["optionType"], "Call");
    assert_eq!(json["config"]["expirationDate"], "2024-12-31");
    assert_eq!(json["config"]["selectedScenarios"][0], "Stable Market");
    assert_eq!(json["curve"]["points"].as_array().unwrap().len(), 100);
    assert_eq!(json["curve"]["points"][0]["assetPrice"], 50.0);
    assert_eq!(json["scenarioRisks"][0]["riskLevel"], 0.1);
}
