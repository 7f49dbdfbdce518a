//! Static scenario risk table.
//!
//! Each [`MarketScenario`](risk_core::types::MarketScenario) maps to a fixed,
//! illustrative risk level. Output always follows the canonical scenario
//! order, whatever order the selection arrives in.

mod table;

pub use table::{ScenarioRiskEntry, ScenarioRiskTable, SCENARIO_CHART_TITLE, SCENARIO_RISK_LABEL};
