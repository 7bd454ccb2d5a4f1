//! Protocol constants for the Causeway denomination grammar.
//!
//! These values are the bridge's identity on the wire: every component that
//! mints, burns, or looks up a bridged asset must agree on them byte-for-byte.
//! They are code, not configuration, and must never change once value moves
//! under them.

/// Prefix carried by every denomination minted by the bridge.
pub const BRIDGE_DENOM_PREFIX: &str = "causeway";

/// Separator between the prefix and the contract address.
pub const BRIDGE_DENOM_SEPARATOR: &str = "/";

/// Prefix and separator joined, the leading tag of every bridged denom.
pub const BRIDGE_DENOM_TAG: &str = "causeway/";

/// Length of a foreign contract address string: `0x` + 40 hex chars.
pub const ETH_ADDRESS_LEN: usize = 42;

/// Length of the denominations generated by the bridge.
pub const BRIDGE_DENOM_LEN: usize =
    BRIDGE_DENOM_PREFIX.len() + BRIDGE_DENOM_SEPARATOR.len() + ETH_ADDRESS_LEN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_prefix_plus_separator() {
        assert_eq!(
            BRIDGE_DENOM_TAG,
            format!("{BRIDGE_DENOM_PREFIX}{BRIDGE_DENOM_SEPARATOR}")
        );
    }

    #[test]
    fn bridged_denom_length() {
        assert_eq!(BRIDGE_DENOM_LEN, 51);
        assert_eq!(BRIDGE_DENOM_LEN, BRIDGE_DENOM_TAG.len() + ETH_ADDRESS_LEN);
    }
}
