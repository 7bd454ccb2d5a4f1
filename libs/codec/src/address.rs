//! Foreign contract address syntax: `0x` + 40 hex chars encoding 20 bytes.

use crate::constants::ETH_ADDRESS_LEN;
use crate::error::AddressError;

/// Validate a foreign ERC-20 contract address string.
pub fn validate_eth_address(address: &str) -> Result<(), AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if address.len() != ETH_ADDRESS_LEN {
        return Err(AddressError::InvalidLength {
            got: address.len(),
        });
    }
    let digits = address
        .strip_prefix("0x")
        .ok_or(AddressError::MissingHexPrefix)?;
    hex::decode(digits)?;
    Ok(())
}
