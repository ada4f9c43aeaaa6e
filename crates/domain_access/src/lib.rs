//! Access Control Domain
//!
//! Maps an authenticated caller to a trust tier and applies the field
//! masking policy for lower tiers. Masking is a pure string transform,
//! applied once, as late as possible, right before display or serialization.

pub mod session;
pub mod masking;

pub use session::{AccessTier, Capability, Session, UserType, resolve_tier};
pub use masking::{FieldKind, mask_field};
