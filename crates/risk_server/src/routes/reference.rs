//! Reference data endpoint
//!
//! Lists the closed label sets, the fixed scenario risk levels and the
//! default inputs, so a client can build its form without hard-coding them.

use axum::{response::Json, routing::get, Router};
use risk_core::types::{MarketScenario, UnderlyingAsset};
use risk_models::payoff::{OptionType, PriceSweep};
use risk_models::portfolio::PortfolioInputs;
use risk_models::scenarios::ScenarioRiskTable;
use serde::Serialize;

use super::AppState;

/// A label with a short description
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelledItem {
    /// Display label
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
}

/// Scenario with its fixed risk level
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReference {
    /// Display label
    pub name: &'static str,
    /// Qualitative note
    pub description: &'static str,
    /// Fixed illustrative risk level
    pub risk_level: f64,
}

/// Response of `GET /api/v1/reference`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceResponse {
    /// Underlying asset labels
    pub assets: Vec<&'static str>,
    /// Option types
    pub option_types: Vec<LabelledItem>,
    /// Scenarios in canonical order
    pub scenarios: Vec<ScenarioReference>,
    /// Price grid used for every curve
    pub sweep: PriceSweep,
    /// Default form inputs
    pub defaults: PortfolioInputs,
}

impl Default for ReferenceResponse {
    fn default() -> Self {
        Self {
            assets: UnderlyingAsset::ALL.iter().map(|a| a.label()).collect(),
            option_types: OptionType::ALL
                .iter()
                .map(|o| LabelledItem {
                    name: o.label(),
                    description: o.description(),
                })
                .collect(),
            scenarios: MarketScenario::ALL
                .iter()
                .map(|&s| ScenarioReference {
                    name: s.name(),
                    description: s.description(),
                    risk_level: ScenarioRiskTable::risk_level(s),
                })
                .collect(),
            sweep: PriceSweep::default(),
            defaults: PortfolioInputs::default(),
        }
    }
}

/// Build the reference routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/reference", get(reference_handler))
}

/// GET /api/v1/reference
async fn reference_handler() -> Json<ReferenceResponse> {
    Json(ReferenceResponse::default())
}
