//! Core Kernel - Foundational types for the claims intelligence platform
//!
//! This crate provides the building blocks shared by every domain module:
//! - Strongly-typed identifiers for adjusters, claims, and interactions
//! - The common error type
//! - Port infrastructure for talking to external collaborators

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{AdjusterId, ClaimId, InteractionId};
pub use error::CoreError;
pub use ports::{DomainPort, PortError};
