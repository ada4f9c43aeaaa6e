//! Intelligence domain errors

use thiserror::Error;

use core_kernel::{AdjusterId, PortError};

/// Errors surfaced by the intelligence service
///
/// Insufficient data is never an error; it shows up as `None` fields in the
/// intelligence objects. Malformed references are logged and skipped during
/// scoring. Only unknown entities and port failures reach this type.
#[derive(Debug, Error)]
pub enum IntelligenceError {
    #[error("Adjuster not found: {0}")]
    AdjusterNotFound(AdjusterId),

    #[error("Carrier not found: {0}")]
    CarrierNotFound(String),

    #[error(transparent)]
    Port(#[from] PortError),
}
