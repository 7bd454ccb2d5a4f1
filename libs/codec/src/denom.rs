//! Construction, classification and validation of bridge denominations.
//!
//! A denomination is either *native* (a plain base denom like `uatom`) or
//! *bridged* (`causeway/0x...`, carrying the foreign contract address the
//! bridge minted it for). The two forms never overlap: the bare prefix is
//! reserved and rejected, so no native denom can shadow a bridged one.

use causeway_types::AssetOrigin;

use crate::address::validate_eth_address;
use crate::base_denom::validate_base_denom;
use crate::constants::{BRIDGE_DENOM_PREFIX, BRIDGE_DENOM_SEPARATOR, BRIDGE_DENOM_TAG};
use crate::error::{DenomError, DenomResult};

/// Build the denomination for a bridged ERC-20 token, e.g.
/// `causeway/0xa478c2975ab1ea89e8196811f51a7b7ade33eb11`.
///
/// Pure constructor - the address is not validated here. Callers hold the
/// invariant that `contract_address` already passed
/// [`validate_eth_address`](crate::address::validate_eth_address).
pub fn bridge_denom(contract_address: &str) -> String {
    format!("{BRIDGE_DENOM_PREFIX}{BRIDGE_DENOM_SEPARATOR}{contract_address}")
}

/// True iff the denom carries the bridge tag.
///
/// Purely syntactic: a tagged string can still be malformed (empty or bogus
/// address part). Use [`validate_denom`] for well-formedness.
pub fn is_bridge_denom(denom: &str) -> bool {
    denom.starts_with(BRIDGE_DENOM_TAG)
}

/// True iff the denom does not carry the bridge tag.
pub fn is_native_denom(denom: &str) -> bool {
    !is_bridge_denom(denom)
}

/// Classify a denom for routing: mint/burn for bridged assets, lock/unlock
/// for native ones.
pub fn asset_origin(denom: &str) -> AssetOrigin {
    if is_bridge_denom(denom) {
        AssetOrigin::Bridged
    } else {
        AssetOrigin::Native
    }
}

/// Recover the foreign contract address from a bridged denom.
///
/// Strips exactly one leading `causeway/` tag; any later separators are part
/// of the address suffix and survive untouched. Returns `None` when the denom
/// is not bridge-tagged, so misuse on native denoms is visible to the caller
/// instead of echoing the input back.
pub fn contract_address(denom: &str) -> Option<&str> {
    denom.strip_prefix(BRIDGE_DENOM_TAG)
}

/// Validate that a denomination is either a well-formed native base denom or
/// a well-formed bridged denom.
///
/// The decision table, in order:
/// 1. the base-denomination grammar must hold for the raw string;
/// 2. the bare prefix `causeway`, and any separated form whose head is not
///    the prefix or whose address part is blank, are malformed;
/// 3. a string without separator is native and already fully checked;
/// 4. `causeway/<address>` requires a well-formed contract address.
pub fn validate_denom(denom: &str) -> DenomResult<()> {
    validate_base_denom(denom)?;

    let (head, tail) = match denom.split_once(BRIDGE_DENOM_SEPARATOR) {
        Some((head, tail)) => (head, Some(tail)),
        None => (denom, None),
    };

    match tail {
        // `causeway` alone is reserved, never a native coin.
        None if head == BRIDGE_DENOM_PREFIX => Err(DenomError::malformed(denom)),
        Some(addr) if head != BRIDGE_DENOM_PREFIX || addr.trim().is_empty() => {
            Err(DenomError::malformed(denom))
        }
        // No separator: a plain native denomination, covered by the base
        // grammar check above.
        None => Ok(()),
        Some(addr) => validate_eth_address(addr).map_err(DenomError::ContractAddress),
    }
}
