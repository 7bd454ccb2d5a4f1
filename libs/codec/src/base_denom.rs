//! Generic base-denomination grammar, independent of the bridge prefix.
//!
//! Every denomination handled by the bridge, native or bridged, must satisfy
//! this grammar before any prefix logic applies: a leading ASCII letter
//! followed by letters, digits or `/ : . _ -`, within the length window below.
//! Note that `/` is an ordinary denom character here - IBC-style names like
//! `ibc/27394F...` are legal base denominations.

use crate::error::BaseDenomError;

/// Shortest accepted denomination.
pub const MIN_BASE_DENOM_LEN: usize = 3;

/// Longest accepted denomination.
pub const MAX_BASE_DENOM_LEN: usize = 128;

#[inline]
fn is_denom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')
}

/// Validate a string against the generic token-denomination grammar.
pub fn validate_base_denom(denom: &str) -> Result<(), BaseDenomError> {
    if denom.is_empty() {
        return Err(BaseDenomError::Empty);
    }
    let len = denom.len();
    if !(MIN_BASE_DENOM_LEN..=MAX_BASE_DENOM_LEN).contains(&len) {
        return Err(BaseDenomError::InvalidLength { len });
    }
    match denom.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(c) => return Err(BaseDenomError::InvalidLeadingChar { got: c }),
        None => return Err(BaseDenomError::Empty),
    }
    for (at, got) in denom.char_indices().skip(1) {
        if !is_denom_char(got) {
            return Err(BaseDenomError::InvalidChar { got, at });
        }
    }
    Ok(())
}
