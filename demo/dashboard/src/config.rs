//! Starting inputs from a TOML file.
//!
//! The file uses the same keys as the HTTP API request body; every key is
//! optional and falls back to the dashboard default:
//!
//! ```toml
//! notional = 250000.0
//! optionType = "Put"
//! strike = 120.0
//! volatilityPct = 35.0
//! scenarios = ["Bear Market", "High Volatility"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use risk_models::portfolio::{PortfolioConfig, PortfolioInputs};

/// Parses and validates inputs from TOML text.
pub fn parse_inputs(text: &str) -> Result<PortfolioConfig> {
    let inputs: PortfolioInputs = toml::from_str(text).context("malformed inputs file")?;
    let config = inputs
        .into_config()
        .context("inputs file holds an invalid portfolio")?;
    Ok(config)
}

/// Reads inputs from `path`.
pub fn load_inputs(path: &Path) -> Result<PortfolioConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_inputs(&text).with_context(|| format!("in {}", path.display()))
}
