//! # Risk Models (L2: Business Logic)
//!
//! Portfolio configuration and the two pure computations behind the
//! derivatives risk dashboard.
//!
//! This crate provides:
//! - Portfolio configuration with validation (`portfolio`)
//! - Option payoff types and the price-value curve (`payoff`)
//! - Static scenario risk table (`scenarios`)
//! - One-shot evaluation of both for a configuration (`assessment`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: every computation is a deterministic function of its
//!   inputs, with no I/O and no shared state
//! - **Validate at the boundary**: invalid inputs are rejected with a
//!   `ValidationError` before any computation runs
//! - **Builder pattern** for ergonomic construction with the dashboard defaults
//!
//! ## Example
//!
//! ```
//! use risk_models::assessment::assess;
//! use risk_models::payoff::OptionType;
//! use risk_models::portfolio::PortfolioConfig;
//! use risk_core::types::MarketScenario;
//!
//! let config = PortfolioConfig::builder()
//!     .notional(100_000.0)
//!     .strike(100.0)
//!     .option_type(OptionType::Call)
//!     .volatility_pct(20.0)
//!     .interest_rate_pct(2.5)
//!     .scenarios([MarketScenario::BullMarket, MarketScenario::StableMarket])
//!     .build()
//!     .unwrap();
//!
//! let assessment = assess(&config).unwrap();
//! assert_eq!(assessment.curve.len(), 100);
//! assert_eq!(assessment.scenario_risks.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod assessment;
pub mod payoff;
pub mod portfolio;
pub mod scenarios;
