//! Record domain errors

use thiserror::Error;

use crate::claim::ClaimStatus;

/// Errors raised by record-level invariant checks
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid status transition from {from:?} to {to:?}")]
    InvalidStatusTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Claim {0} is closed but carries no closed date")]
    MissingClosedDate(String),

    #[error("Claim {0} is open but carries a closed date")]
    UnexpectedClosedDate(String),

    #[error("Claim {0} closed before it was opened")]
    ClosedBeforeOpened(String),
}
