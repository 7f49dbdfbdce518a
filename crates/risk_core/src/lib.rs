//! # risk_core: Foundation Types for Derivatives Risk Assessment
//!
//! ## Layer 1 (Foundation) Role
//!
//! risk_core is the bottom layer of the workspace, providing:
//! - Closed enumerations: `UnderlyingAsset`, `MarketScenario` (`types`)
//! - Calendar date wrapper: `Date` (`types::time`)
//! - Percentage normalisation: `Percent` (`types::percent`)
//! - Error types: `ValidationError`, `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - chrono: Date arithmetic and parsing
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use risk_core::types::{Date, MarketScenario, Percent, UnderlyingAsset};
//!
//! let expiry = Date::from_ymd(2024, 12, 31).unwrap();
//! assert_eq!(expiry.to_string(), "2024-12-31");
//!
//! let scenario: MarketScenario = "Bull Market".parse().unwrap();
//! assert_eq!(scenario, MarketScenario::BullMarket);
//!
//! let asset: UnderlyingAsset = "Synthetic Asset B".parse().unwrap();
//! assert_eq!(asset.label(), "Synthetic Asset B");
//!
//! let vol = Percent::new(20.0).to_fraction();
//! # assert!((vol - 0.2_f64).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, UnderlyingAsset, MarketScenario

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
