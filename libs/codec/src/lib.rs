//! # Causeway Denomination Codec
//!
//! ## Purpose
//!
//! This crate is the "Rules" layer for Causeway asset identifiers: the single
//! place that defines how a bridged ERC-20 token is named on the host chain
//! and how an arbitrary denomination string is classified and validated.
//! Every component that moves value across the bridge - minting, burning,
//! balance queries, governance allow-lists - must agree on these rules
//! byte-for-byte; a disagreement strands funds under an unreachable name.
//!
//! ## Denomination grammar
//!
//! ```text
//! native:   uatom                      (plain base denomination)
//! bridged:  causeway/0xa478c2...eb11   (prefix / contract address)
//! ```
//!
//! The bare prefix `causeway` is reserved: it is never a valid native coin,
//! so the two forms cannot collide.
//!
//! ## Integration Points
//!
//! - **Input Sources**: raw denom strings from transactions, queries, and
//!   governance registry entries
//! - **Output Destinations**: mint/burn vs lock/unlock routing, allow-list
//!   admission, ledger records
//! - **Data Types**: [`TokenMapping`] and [`AssetOrigin`] from
//!   `causeway-types`
//!
//! ## Architecture Role
//!
//! ```text
//! causeway-types → [causeway-codec] → bridge services
//!       ↑                ↓                  ↓
//!  Pure Data        Grammar Rules      Routing and
//!  Structures       Validation         Admission
//! ```
//!
//! All functions here are pure and synchronous: no I/O, no shared state,
//! safe to call from any thread.

pub mod address;
pub mod base_denom;
pub mod constants;
pub mod denom;
pub mod error;
pub mod registry;

// Re-export the full public surface at the crate root.
pub use address::validate_eth_address;
pub use base_denom::{validate_base_denom, MAX_BASE_DENOM_LEN, MIN_BASE_DENOM_LEN};
pub use constants::{
    BRIDGE_DENOM_LEN, BRIDGE_DENOM_PREFIX, BRIDGE_DENOM_SEPARATOR, BRIDGE_DENOM_TAG,
    ETH_ADDRESS_LEN,
};
pub use denom::{
    asset_origin, bridge_denom, contract_address, is_bridge_denom, is_native_denom,
    validate_denom,
};
pub use error::{
    AddressError, BaseDenomError, DenomError, DenomResult, MappingError, MappingResult,
};
pub use registry::{validate_mapping, validate_token_mapping};

// Data types callers pair with these validators.
pub use causeway_types::{AssetOrigin, TokenMapping};
