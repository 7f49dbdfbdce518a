//! One-shot evaluation of a portfolio configuration.
//!
//! Hosts call [`assess`] after every input change; nothing is cached between
//! calls.

use risk_core::types::ValidationError;

use crate::payoff::{PayoffCurve, PayoffCurveGenerator};
use crate::portfolio::PortfolioConfig;
use crate::scenarios::{ScenarioRiskEntry, ScenarioRiskTable};

/// Both derived views of a configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RiskAssessment {
    /// The configuration that was evaluated.
    pub config: PortfolioConfig,
    /// Portfolio value across the price sweep.
    pub curve: PayoffCurve,
    /// Risk levels of the selected scenarios, in canonical order.
    pub scenario_risks: Vec<ScenarioRiskEntry>,
}

impl RiskAssessment {
    /// Evaluates `config` with an explicit curve generator.
    ///
    /// # Errors
    ///
    /// Propagates [`PayoffCurveGenerator::generate`] errors.
    pub fn evaluate(
        generator: &PayoffCurveGenerator,
        config: &PortfolioConfig,
    ) -> Result<Self, ValidationError> {
        let curve = generator.generate(config)?;
        let scenario_risks = ScenarioRiskTable::lookup(config.scenarios().iter().copied());

        Ok(Self {
            config: config.clone(),
            curve,
            scenario_risks,
        })
    }
}

/// Evaluates `config` with the default 100-point sweep.
///
/// # Errors
///
/// `ValidationError` if the configuration cannot be evaluated.
pub fn assess(config: &PortfolioConfig) -> Result<RiskAssessment, ValidationError> {
    RiskAssessment::evaluate(&PayoffCurveGenerator::default(), config)
}
