use std::collections::BTreeSet;

use risk_core::types::{MarketScenario, ValidationError};

/// Title of the scenario bar chart.
pub const SCENARIO_CHART_TITLE: &str = "Risk Level by Market Scenario (Illustrative)";

/// Y-axis label of the scenario bar chart.
pub const SCENARIO_RISK_LABEL: &str = "Illustrative Risk Level";

/// One row of the scenario table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioRiskEntry {
    /// Scenario.
    #[cfg_attr(feature = "serde", serde(rename = "scenarioName"))]
    pub scenario: MarketScenario,
    /// Fixed illustrative risk level.
    pub risk_level: f64,
}

/// Constant lookup from scenario to illustrative risk level.
///
/// | Scenario | Risk level |
/// |---|---|
/// | Bull Market | 0.2 |
/// | Bear Market | 0.3 |
/// | Stable Market | 0.1 |
/// | High Volatility | 0.4 |
///
/// # Examples
///
/// ```
/// use risk_core::types::MarketScenario;
/// use risk_models::scenarios::ScenarioRiskTable;
///
/// let entries = ScenarioRiskTable::lookup([
///     MarketScenario::StableMarket,
///     MarketScenario::BullMarket,
/// ]);
/// assert_eq!(entries[0].scenario, MarketScenario::BullMarket);
/// assert_eq!(entries[0].risk_level, 0.2);
/// assert_eq!(entries[1].scenario, MarketScenario::StableMarket);
/// assert_eq!(entries[1].risk_level, 0.1);
///
/// assert!(ScenarioRiskTable::lookup([]).is_empty());
/// assert!(ScenarioRiskTable::lookup_names(["Sideways"]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioRiskTable;

impl ScenarioRiskTable {
    /// Returns the fixed risk level of one scenario.
    #[inline]
    pub fn risk_level(scenario: MarketScenario) -> f64 {
        match scenario {
            MarketScenario::BullMarket => 0.2,
            MarketScenario::BearMarket => 0.3,
            MarketScenario::StableMarket => 0.1,
            MarketScenario::HighVolatility => 0.4,
        }
    }

    /// Returns every scenario with its risk level, in canonical order.
    pub fn all() -> Vec<ScenarioRiskEntry> {
        Self::lookup(MarketScenario::ALL)
    }

    /// Looks up the selected scenarios.
    ///
    /// Output is in canonical order; duplicates collapse; an empty selection
    /// gives an empty result.
    pub fn lookup<I>(selected: I) -> Vec<ScenarioRiskEntry>
    where
        I: IntoIterator<Item = MarketScenario>,
    {
        selected
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|scenario| ScenarioRiskEntry {
                scenario,
                risk_level: Self::risk_level(scenario),
            })
            .collect()
    }

    /// Looks up scenarios by label.
    ///
    /// # Errors
    ///
    /// `ValidationError::UnknownScenario` for the first label outside the
    /// closed set. Unknown names are never dropped silently.
    pub fn lookup_names<I, S>(labels: I) -> Result<Vec<ScenarioRiskEntry>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = labels
            .into_iter()
            .map(|label| label.as_ref().parse::<MarketScenario>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self::lookup(selected))
    }
}
