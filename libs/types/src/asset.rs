//! Asset-level data types: origin classification and registry records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an asset ultimately originates.
///
/// Higher-level bridge logic routes on this: native assets move through
/// lock/unlock, bridged assets through mint/burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOrigin {
    /// Issued on the host chain; identified by a plain base denomination.
    Native,
    /// Minted by the bridge to represent a foreign ERC-20 contract.
    Bridged,
}

impl AssetOrigin {
    /// True for host-chain assets.
    #[inline]
    pub fn is_native(&self) -> bool {
        matches!(self, AssetOrigin::Native)
    }

    /// True for bridge-minted assets.
    #[inline]
    pub fn is_bridged(&self) -> bool {
        matches!(self, AssetOrigin::Bridged)
    }
}

impl fmt::Display for AssetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetOrigin::Native => write!(f, "native"),
            AssetOrigin::Bridged => write!(f, "bridged"),
        }
    }
}

/// Registry entry binding a native denomination to a foreign ERC-20 contract.
///
/// The pairing itself is the only assertion the record makes - both fields
/// validate independently and no cross-field relationship is checked. Entries
/// travel in governance payloads, so they serialize as plain JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMapping {
    /// Native denomination, e.g. `uatom`.
    pub denom: String,
    /// Foreign contract address, `0x` + 40 hex chars.
    pub contract_address: String,
}

impl TokenMapping {
    /// Build a mapping record. No validation happens here; run the record
    /// through `causeway-codec` before accepting it into a registry.
    pub fn new(denom: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            contract_address: contract_address.into(),
        }
    }
}

impl fmt::Display for TokenMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.denom, self.contract_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_predicates() {
        assert!(AssetOrigin::Native.is_native());
        assert!(!AssetOrigin::Native.is_bridged());
        assert!(AssetOrigin::Bridged.is_bridged());
        assert!(!AssetOrigin::Bridged.is_native());
    }

    #[test]
    fn origin_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AssetOrigin::Native).unwrap(),
            "\"native\""
        );
        assert_eq!(
            serde_json::to_string(&AssetOrigin::Bridged).unwrap(),
            "\"bridged\""
        );
    }

    #[test]
    fn mapping_roundtrips_through_json() {
        let mapping = TokenMapping::new("uatom", "0xa478c2975ab1ea89e8196811f51a7b7ade33eb11");
        let json = serde_json::to_string(&mapping).unwrap();
        let back: TokenMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }

    #[test]
    fn mapping_display_shows_both_sides() {
        let mapping = TokenMapping::new("uatom", "0xa478c2975ab1ea89e8196811f51a7b7ade33eb11");
        assert_eq!(
            mapping.to_string(),
            "uatom <-> 0xa478c2975ab1ea89e8196811f51a7b7ade33eb11"
        );
    }
}
