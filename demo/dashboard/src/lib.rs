//! # Risk Dashboard
//!
//! Terminal dashboard for the derivatives risk assessment models.
//!
//! Uses ratatui for rendering and crossterm for terminal handling. All
//! computation is local: every edit re-runs the payoff curve and scenario
//! lookup from `risk_models`.
//!
//! ### Screens
//! - **Risk Assessment**: Input sidebar, payoff curve and scenario risk chart
//! - **Key Concepts**: Learning outcomes, risk factors and the disclaimer

pub mod app;
pub mod chart;
pub mod config;
pub mod content;
pub mod form;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{DashboardState, Screen, TuiApp};
    pub use crate::config::load_inputs;
    pub use crate::form::{Field, PortfolioForm};
}
