//! # Causeway Types Library
//!
//! ## Purpose
//!
//! Pure data structures shared across the Causeway bridge: the asset origin
//! classification and the token mapping records that the governance registry
//! stores. No validation logic lives here - this crate defines the shapes,
//! `causeway-codec` defines the rules.
//!
//! ## Integration Points
//!
//! - **Input Sources**: governance proposals and registry files deserialized
//!   via serde
//! - **Output Destinations**: the codec's validators, the minting/burning
//!   router, allow-list queries
//!
//! ## Architecture Role
//!
//! ```text
//! causeway-types → causeway-codec → bridge services
//!       ↑                ↓                ↓
//!  Pure Data        Grammar Rules    Mint/Burn vs
//!  Structures       Validation       Lock/Unlock
//! ```

pub mod asset;

pub use asset::{AssetOrigin, TokenMapping};
