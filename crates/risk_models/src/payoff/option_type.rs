//! Option type and intrinsic payoff.

use num_traits::Float;
use risk_core::types::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Type of option held in the synthetic position.
///
/// # Variants
/// - `Call`: right to buy; pays max(S - K, 0)
/// - `Put`: right to sell; pays max(K - S, 0)
///
/// # Examples
/// ```
/// use risk_models::payoff::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both option types in display order.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Evaluate the intrinsic payoff for a given spot and strike.
    ///
    /// The result is never negative.
    ///
    /// # Arguments
    /// * `spot` - Underlying price (S)
    /// * `strike` - Strike price (K)
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Returns the other option type.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }

    /// Returns a one-line description of the holder's right.
    pub fn description(&self) -> &'static str {
        match self {
            OptionType::Call => "Call (right to buy)",
            OptionType::Put => "Put (right to sell)",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OptionType {
    type Err = ValidationError;

    /// Parses `"Call"` or `"Put"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(ValidationError::UnknownOptionType(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::OptionType;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for OptionType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.label())
        }
    }

    impl<'de> Deserialize<'de> for OptionType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            OptionType::from_str(&s).map_err(de::Error::custom)
        }
    }
}
