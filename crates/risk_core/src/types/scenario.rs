//! Named market scenarios.
//!
//! The scenario set is closed: exactly four regimes exist, and their
//! declaration order is the canonical display order. `Ord` follows that
//! order, so a `BTreeSet<MarketScenario>` iterates canonically.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use risk_core::types::MarketScenario;
//!
//! let selected: BTreeSet<MarketScenario> = ["Stable Market", "bull-market"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let ordered: Vec<_> = selected.into_iter().collect();
//! assert_eq!(ordered, vec![MarketScenario::BullMarket, MarketScenario::StableMarket]);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;
use super::label_key;

/// Market regime used for the qualitative risk chart.
///
/// # Variants
/// - `BullMarket`: Rising prices
/// - `BearMarket`: Falling prices
/// - `StableMarket`: Range-bound prices
/// - `HighVolatility`: Large moves in either direction
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarketScenario {
    /// Bull Market
    BullMarket,
    /// Bear Market
    BearMarket,
    /// Stable Market
    StableMarket,
    /// High Volatility
    HighVolatility,
}

impl MarketScenario {
    /// All scenarios in canonical order.
    pub const ALL: [MarketScenario; 4] = [
        MarketScenario::BullMarket,
        MarketScenario::BearMarket,
        MarketScenario::StableMarket,
        MarketScenario::HighVolatility,
    ];

    /// Returns the display label.
    ///
    /// # Examples
    ///
    /// ```
    /// use risk_core::types::MarketScenario;
    ///
    /// assert_eq!(MarketScenario::HighVolatility.name(), "High Volatility");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            MarketScenario::BullMarket => "Bull Market",
            MarketScenario::BearMarket => "Bear Market",
            MarketScenario::StableMarket => "Stable Market",
            MarketScenario::HighVolatility => "High Volatility",
        }
    }

    /// Returns a short qualitative note on the regime.
    pub fn description(&self) -> &'static str {
        match self {
            MarketScenario::BullMarket => {
                "Rising prices: lower risk for call holders, higher for puts"
            }
            MarketScenario::BearMarket => {
                "Falling prices: higher risk for call holders, lower for puts"
            }
            MarketScenario::StableMarket => "Range-bound prices: the lowest illustrative risk",
            MarketScenario::HighVolatility => {
                "Large swings in either direction: the highest illustrative risk"
            }
        }
    }

    /// Position of this scenario in the canonical order (0-based).
    #[inline]
    pub fn canonical_index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for MarketScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MarketScenario {
    type Err = ValidationError;

    /// Parses a scenario label (case-insensitive; `-`/`_` read as spaces).
    ///
    /// # Errors
    /// `ValidationError::UnknownScenario` for any label outside the enumeration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = label_key(s);
        MarketScenario::ALL
            .iter()
            .copied()
            .find(|scenario| label_key(scenario.name()) == key)
            .ok_or_else(|| ValidationError::UnknownScenario(s.to_string()))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::MarketScenario;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for MarketScenario {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for MarketScenario {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            MarketScenario::from_str(&s).map_err(de::Error::custom)
        }
    }
}
