//! Synthetic underlying assets.
//!
//! Asset labels are cosmetic: they appear in titles and summaries but never
//! change the payoff formula.

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;
use super::label_key;

/// Synthetic underlying asset selectable in the dashboard.
///
/// # Examples
///
/// ```
/// use risk_core::types::UnderlyingAsset;
///
/// let asset: UnderlyingAsset = "synthetic-asset-c".parse().unwrap();
/// assert_eq!(asset, UnderlyingAsset::SyntheticAssetC);
/// assert_eq!(asset.to_string(), "Synthetic Asset C");
///
/// // Bare letters are accepted as shorthand
/// assert_eq!("b".parse::<UnderlyingAsset>().unwrap(), UnderlyingAsset::SyntheticAssetB);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnderlyingAsset {
    /// Synthetic Asset A
    #[default]
    SyntheticAssetA,
    /// Synthetic Asset B
    SyntheticAssetB,
    /// Synthetic Asset C
    SyntheticAssetC,
}

impl UnderlyingAsset {
    /// All assets in display order.
    pub const ALL: [UnderlyingAsset; 3] = [
        UnderlyingAsset::SyntheticAssetA,
        UnderlyingAsset::SyntheticAssetB,
        UnderlyingAsset::SyntheticAssetC,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            UnderlyingAsset::SyntheticAssetA => "Synthetic Asset A",
            UnderlyingAsset::SyntheticAssetB => "Synthetic Asset B",
            UnderlyingAsset::SyntheticAssetC => "Synthetic Asset C",
        }
    }

    /// Returns the next asset, wrapping around after the last one.
    pub fn next(self) -> Self {
        match self {
            UnderlyingAsset::SyntheticAssetA => UnderlyingAsset::SyntheticAssetB,
            UnderlyingAsset::SyntheticAssetB => UnderlyingAsset::SyntheticAssetC,
            UnderlyingAsset::SyntheticAssetC => UnderlyingAsset::SyntheticAssetA,
        }
    }

    /// Returns the previous asset, wrapping around before the first one.
    pub fn previous(self) -> Self {
        match self {
            UnderlyingAsset::SyntheticAssetA => UnderlyingAsset::SyntheticAssetC,
            UnderlyingAsset::SyntheticAssetB => UnderlyingAsset::SyntheticAssetA,
            UnderlyingAsset::SyntheticAssetC => UnderlyingAsset::SyntheticAssetB,
        }
    }
}

impl fmt::Display for UnderlyingAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for UnderlyingAsset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = label_key(s);
        UnderlyingAsset::ALL
            .iter()
            .copied()
            .find(|asset| {
                let label = label_key(asset.label());
                label == key || label.strip_prefix("synthetic asset ") == Some(key.as_str())
            })
            .ok_or_else(|| ValidationError::UnknownAsset(s.to_string()))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::UnderlyingAsset;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for UnderlyingAsset {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.label())
        }
    }

    impl<'de> Deserialize<'de> for UnderlyingAsset {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            UnderlyingAsset::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        for asset in UnderlyingAsset::ALL {
            assert_eq!(asset.label().parse::<UnderlyingAsset>().unwrap(), asset);
        }
        assert_eq!(
            "SYNTHETIC_ASSET_B".parse::<UnderlyingAsset>().unwrap(),
            UnderlyingAsset::SyntheticAssetB
        );
    }

    #[test]
    fn test_parse_unknown_asset() {
        let err = "Synthetic Asset D".parse::<UnderlyingAsset>().unwrap_err();
        assert_eq!(err.kind(), "unknown_asset");
        assert!("".parse::<UnderlyingAsset>().is_err());
    }

    #[test]
    fn test_cycle_next_previous() {
        for asset in UnderlyingAsset::ALL {
            assert_eq!(asset.next().previous(), asset);
        }
        assert_eq!(
            UnderlyingAsset::SyntheticAssetC.next(),
            UnderlyingAsset::SyntheticAssetA
        );
    }

    #[test]
    fn test_default_is_asset_a() {
        assert_eq!(UnderlyingAsset::default(), UnderlyingAsset::SyntheticAssetA);
    }
}
