//! Validation of token-mapping registry entries.
//!
//! Registry entries arrive from governance payloads, so rejections are logged
//! at debug level for operators before the error is returned to the caller.

use causeway_types::TokenMapping;
use tracing::debug;

use crate::address::validate_eth_address;
use crate::base_denom::validate_base_denom;
use crate::error::{MappingError, MappingResult};

/// Validate a (native denomination, contract address) registry pair.
///
/// The two sides are checked independently; the record asserts nothing beyond
/// the pairing itself.
pub fn validate_token_mapping(denom: &str, contract_address: &str) -> MappingResult<()> {
    if let Err(err) = validate_base_denom(denom) {
        debug!("rejecting token mapping {:?}: {}", denom, err);
        return Err(MappingError::Denom(err));
    }
    if let Err(err) = validate_eth_address(contract_address) {
        debug!("rejecting token mapping {:?}: {}", contract_address, err);
        return Err(MappingError::Address(err));
    }
    Ok(())
}

/// Validate a deserialized [`TokenMapping`] record.
pub fn validate_mapping(mapping: &TokenMapping) -> MappingResult<()> {
    validate_token_mapping(&mapping.denom, &mapping.contract_address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AddressError, BaseDenomError};

    const CONTRACT: &str = "0xa1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1";

    #[test]
    fn accepts_valid_pair() {
        assert_eq!(validate_token_mapping("uatom", CONTRACT), Ok(()));
    }

    #[test]
    fn rejects_empty_denom() {
        assert_eq!(
            validate_token_mapping("", CONTRACT),
            Err(MappingError::Denom(BaseDenomError::Empty))
        );
    }

    #[test]
    fn rejects_bad_address_length() {
        assert_eq!(
            validate_token_mapping("uatom", "0xabc"),
            Err(MappingError::Address(AddressError::InvalidLength {
                got: 5
            }))
        );
    }

    #[test]
    fn rejects_missing_hex_prefix() {
        let bare = "a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a112";
        assert_eq!(
            validate_token_mapping("uatom", bare),
            Err(MappingError::Address(AddressError::MissingHexPrefix))
        );
    }

    #[test]
    fn denom_side_is_checked_before_address_side() {
        // Both sides invalid: the denom error wins.
        assert!(matches!(
            validate_token_mapping("", "0xabc"),
            Err(MappingError::Denom(_))
        ));
    }

    #[test]
    fn record_wrapper_matches_pair_function() {
        let mapping = TokenMapping::new("uatom", CONTRACT);
        assert_eq!(validate_mapping(&mapping), Ok(()));

        let bad = TokenMapping::new("uatom", "0xabc");
        assert!(validate_mapping(&bad).is_err());
    }
}
