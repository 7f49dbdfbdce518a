//! REST API server for the derivatives risk assessment models
//!
//! This crate exposes the payoff curve generator and the scenario risk table
//! over HTTP, together with the reference data a client needs to build an
//! input form.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export model dependencies for integration
pub use risk_core;
pub use risk_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
