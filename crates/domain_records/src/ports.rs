//! Record query port
//!
//! The persistence layer (external to this workspace) implements this trait;
//! the intelligence engine consumes immutable snapshots through it. The
//! engine never writes.

use async_trait::async_trait;

use core_kernel::{AdjusterId, DomainPort, PortError};
use crate::adjuster::Adjuster;
use crate::claim::Claim;
use crate::interaction::Interaction;

/// Read-only query interface over adjusters, claims, and interactions
#[async_trait]
pub trait RecordsPort: DomainPort {
    /// Fetches a single adjuster, `None` if unknown
    async fn adjuster(&self, id: AdjusterId) -> Result<Option<Adjuster>, PortError>;

    /// Fetches every adjuster attached to a carrier
    async fn adjusters_by_carrier(&self, carrier: &str) -> Result<Vec<Adjuster>, PortError>;

    /// Fetches every claim handled by an adjuster
    async fn claims_by_adjuster(&self, id: AdjusterId) -> Result<Vec<Claim>, PortError>;

    /// Fetches an adjuster's interaction log, ordered by date
    async fn interactions_by_adjuster(&self, id: AdjusterId)
        -> Result<Vec<Interaction>, PortError>;
}
