//! In-memory records adapter
//!
//! Implements `RecordsPort` over plain vectors so service-level tests can
//! run without a database.

use async_trait::async_trait;

use core_kernel::{AdjusterId, DomainPort, PortError};
use domain_records::{Adjuster, Claim, Interaction, RecordsPort};

/// In-memory `RecordsPort` adapter
#[derive(Debug, Default)]
pub struct InMemoryRecords {
    adjusters: Vec<Adjuster>,
    claims: Vec<Claim>,
    interactions: Vec<Interaction>,
}

impl InMemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an adjuster together with their records
    pub fn seed(
        &mut self,
        adjuster: Adjuster,
        claims: Vec<Claim>,
        interactions: Vec<Interaction>,
    ) {
        self.adjusters.push(adjuster);
        self.claims.extend(claims);
        self.interactions.extend(interactions);
    }
}

impl DomainPort for InMemoryRecords {}

#[async_trait]
impl RecordsPort for InMemoryRecords {
    async fn adjuster(&self, id: AdjusterId) -> Result<Option<Adjuster>, PortError> {
        Ok(self.adjusters.iter().find(|a| a.id == id).cloned())
    }

    async fn adjusters_by_carrier(&self, carrier: &str) -> Result<Vec<Adjuster>, PortError> {
        Ok(self
            .adjusters
            .iter()
            .filter(|a| a.carrier == carrier)
            .cloned()
            .collect())
    }

    async fn claims_by_adjuster(&self, id: AdjusterId) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .claims
            .iter()
            .filter(|c| c.adjuster_id == id)
            .cloned()
            .collect())
    }

    async fn interactions_by_adjuster(
        &self,
        id: AdjusterId,
    ) -> Result<Vec<Interaction>, PortError> {
        let mut interactions: Vec<Interaction> = self
            .interactions
            .iter()
            .filter(|i| i.adjuster_id == id)
            .cloned()
            .collect();
        interactions.sort_by_key(|i| i.date);
        Ok(interactions)
    }
}
