//! Risk assessment endpoints
//!
//! Each request is evaluated from scratch; no state is kept between calls.

use axum::{extract::rejection::JsonRejection, response::Json, routing::post, Router};
use risk_models::assessment::{assess, RiskAssessment};
use risk_models::payoff::{
    adjustment_factor, OptionType, PayoffCurve, PayoffCurveGenerator, PriceValuePoint,
    CURVE_X_LABEL, CURVE_Y_LABEL, STRIKE_LEVEL_LABEL,
};
use risk_models::portfolio::{PortfolioConfig, PortfolioInputs};
use risk_models::scenarios::{
    ScenarioRiskEntry, ScenarioRiskTable, SCENARIO_CHART_TITLE, SCENARIO_RISK_LABEL,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// Curve chart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveResponse {
    /// Chart title
    pub title: String,
    /// Option type the curve was generated for
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Annotation for the vertical strike marker
    pub strike_label: String,
    /// Annotation drawn at `strike_marker_level`
    pub strike_level_label: String,
    /// 90% of the maximum portfolio value
    pub strike_marker_level: f64,
    /// Samples in ascending price order
    pub points: Vec<PriceValuePoint>,
}

impl From<PayoffCurve> for CurveResponse {
    fn from(curve: PayoffCurve) -> Self {
        Self {
            title: curve.title(),
            option_type: curve.option_type(),
            strike: curve.strike(),
            x_label: CURVE_X_LABEL.to_string(),
            y_label: CURVE_Y_LABEL.to_string(),
            strike_label: curve.strike_label(),
            strike_level_label: STRIKE_LEVEL_LABEL.to_string(),
            strike_marker_level: curve.strike_marker_level(),
            points: curve.into_points(),
        }
    }
}

/// Scenario chart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRiskResponse {
    /// Chart title
    pub title: String,
    /// Y-axis label
    pub y_label: String,
    /// Selected scenarios in canonical order
    pub entries: Vec<ScenarioRiskEntry>,
}

impl From<Vec<ScenarioRiskEntry>> for ScenarioRiskResponse {
    fn from(entries: Vec<ScenarioRiskEntry>) -> Self {
        Self {
            title: SCENARIO_CHART_TITLE.to_string(),
            y_label: SCENARIO_RISK_LABEL.to_string(),
            entries,
        }
    }
}

/// Full assessment payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessResponse {
    /// Normalised configuration that was evaluated
    pub config: PortfolioConfig,
    /// `(1 + sigma) * exp(r)`
    pub adjustment_factor: f64,
    /// Curve chart
    pub curve: CurveResponse,
    /// Scenario chart
    pub scenario_risks: ScenarioRiskResponse,
}

impl From<RiskAssessment> for AssessResponse {
    fn from(assessment: RiskAssessment) -> Self {
        let factor = adjustment_factor(
            assessment.config.volatility(),
            assessment.config.interest_rate(),
        );
        Self {
            curve: CurveResponse::from(assessment.curve),
            scenario_risks: ScenarioRiskResponse::from(assessment.scenario_risks),
            adjustment_factor: factor,
            config: assessment.config,
        }
    }
}

/// Body of `POST /api/v1/scenario-risk`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioRiskRequest {
    /// Scenario labels
    pub scenarios: Vec<String>,
}

/// Build the assessment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/assess", post(assess_handler))
        .route("/api/v1/payoff-curve", post(payoff_curve_handler))
        .route("/api/v1/scenario-risk", post(scenario_risk_handler))
}

/// POST /api/v1/assess
async fn assess_handler(
    payload: Result<Json<PortfolioInputs>, JsonRejection>,
) -> Result<Json<AssessResponse>, ApiError> {
    let Json(inputs) = payload?;
    let config = inputs.into_config()?;
    let assessment = assess(&config)?;

    tracing::debug!(
        option_type = %config.option_type(),
        strike = config.strike(),
        scenarios = assessment.scenario_risks.len(),
        "Assessment computed"
    );

    Ok(Json(AssessResponse::from(assessment)))
}

/// POST /api/v1/payoff-curve
async fn payoff_curve_handler(
    payload: Result<Json<PortfolioInputs>, JsonRejection>,
) -> Result<Json<CurveResponse>, ApiError> {
    let Json(inputs) = payload?;
    let config = inputs.into_config()?;
    let curve = PayoffCurveGenerator::default().generate(&config)?;

    tracing::debug!(strike = curve.strike(), points = curve.len(), "Payoff curve computed");

    Ok(Json(CurveResponse::from(curve)))
}

/// POST /api/v1/scenario-risk
async fn scenario_risk_handler(
    payload: Result<Json<ScenarioRiskRequest>, JsonRejection>,
) -> Result<Json<ScenarioRiskResponse>, ApiError> {
    let Json(request) = payload?;
    let entries = ScenarioRiskTable::lookup_names(&request.scenarios)?;

    tracing::debug!(entries = entries.len(), "Scenario risk looked up");

    Ok(Json(ScenarioRiskResponse::from(entries)))
}
