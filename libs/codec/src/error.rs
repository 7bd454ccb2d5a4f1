//! Error types for denomination and registry validation.
//!
//! Every failure is a returned value carrying the offending data; nothing in
//! this crate panics. The bridge's callers decide whether a failure rejects a
//! transaction, a registry entry, or a query - retrying never helps, these
//! checks are deterministic.

use thiserror::Error;

use crate::base_denom::{MAX_BASE_DENOM_LEN, MIN_BASE_DENOM_LEN};
use crate::constants::{BRIDGE_DENOM_TAG, ETH_ADDRESS_LEN};

/// Base denomination grammar failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BaseDenomError {
    /// Denomination string is empty.
    #[error("denomination is empty")]
    Empty,

    /// Length outside the allowed window.
    #[error(
        "denomination length {len} outside allowed range [{min}, {max}]",
        min = MIN_BASE_DENOM_LEN,
        max = MAX_BASE_DENOM_LEN
    )]
    InvalidLength { len: usize },

    /// Denominations must start with an ASCII letter.
    #[error("denomination must start with an ASCII letter, got {got:?}")]
    InvalidLeadingChar { got: char },

    /// Character outside the allowed set.
    #[error("denomination contains invalid character {got:?} at byte {at}")]
    InvalidChar { got: char, at: usize },
}

/// Foreign contract address syntax failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AddressError {
    /// Address string is empty.
    #[error("contract address is empty")]
    Empty,

    /// Addresses are exactly `0x` + 40 hex chars.
    #[error(
        "contract address length {got}, expected {expected}",
        expected = ETH_ADDRESS_LEN
    )]
    InvalidLength { got: usize },

    /// Missing the `0x` prefix.
    #[error("contract address must start with '0x'")]
    MissingHexPrefix,

    /// The digits after `0x` are not valid hex.
    #[error("contract address is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Denomination validation failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DenomError {
    /// The string fails the generic base-denomination grammar that every
    /// denom, native or bridged, must satisfy.
    #[error("invalid base denomination: {0}")]
    Base(#[from] BaseDenomError),

    /// The string does not match the `prefix/address`-or-native shape.
    #[error(
        "malformed denom {denom:?}: expected the format '{tag}{{contract-address}}'",
        tag = BRIDGE_DENOM_TAG
    )]
    Malformed { denom: String },

    /// The address part of a bridged denom fails contract-address syntax.
    #[error("invalid contract address: {0}")]
    ContractAddress(#[source] AddressError),
}

impl DenomError {
    /// Build a `Malformed` error for the given input.
    pub fn malformed(denom: impl Into<String>) -> Self {
        Self::Malformed {
            denom: denom.into(),
        }
    }
}

/// Token-mapping registry record failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MappingError {
    /// The native denomination side of the record is invalid.
    #[error("invalid native denomination: {0}")]
    Denom(#[source] BaseDenomError),

    /// The contract address side of the record is invalid.
    #[error("invalid contract address: {0}")]
    Address(#[source] AddressError),
}

/// Result type for denomination validation.
pub type DenomResult<T> = std::result::Result<T, DenomError>;

/// Result type for registry record validation.
pub type MappingResult<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_expected_shape() {
        let err = DenomError::malformed("bogus");
        let msg = err.to_string();
        assert!(msg.contains("bogus"), "got: {msg}");
        assert!(msg.contains("causeway/{contract-address}"), "got: {msg}");
    }

    #[test]
    fn wrapped_errors_keep_their_source() {
        use std::error::Error as _;

        let err = DenomError::ContractAddress(AddressError::MissingHexPrefix);
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "invalid contract address: contract address must start with '0x'"
        );

        let err = MappingError::Denom(BaseDenomError::Empty);
        assert_eq!(
            err.to_string(),
            "invalid native denomination: denomination is empty"
        );
    }
}
