//! Intelligence service
//!
//! The caller-facing surface of the engine: fetches a snapshot through the
//! records port, runs it through the scoring engines, and returns the
//! transient intelligence object. Nothing is retried here; retry policy
//! belongs to the fetch layer behind the port.

use tracing::instrument;

use core_kernel::AdjusterId;
use domain_records::{Claim, Interaction, RecordsPort};

use crate::carrier::{CarrierAggregationEngine, CarrierIntelligence};
use crate::classifier::OutcomeClassifier;
use crate::config::ScoringConfig;
use crate::error::IntelligenceError;
use crate::lexicon::SignalLexicon;
use crate::scoring::{AdjusterIntelligence, AdjusterScoringEngine};

/// Computes intelligence objects on demand over a records port
pub struct IntelligenceService<P> {
    records: P,
    scoring: AdjusterScoringEngine,
    aggregation: CarrierAggregationEngine,
}

impl<P: RecordsPort> IntelligenceService<P> {
    /// Creates a service with the default lexicon and configuration
    pub fn new(records: P) -> Self {
        Self::with_rules(records, SignalLexicon::default(), ScoringConfig::default())
    }

    /// Creates a service over a tuned ruleset and configuration
    pub fn with_rules(records: P, lexicon: SignalLexicon, config: ScoringConfig) -> Self {
        let classifier = OutcomeClassifier::new(lexicon);
        Self {
            records,
            scoring: AdjusterScoringEngine::new(classifier.clone(), config.clone()),
            aggregation: CarrierAggregationEngine::new(classifier, config),
        }
    }

    /// Computes one adjuster's intelligence from the current records
    ///
    /// # Errors
    ///
    /// `AdjusterNotFound` if the port does not know the adjuster; port
    /// failures pass through.
    #[instrument(skip(self))]
    pub async fn adjuster_intelligence(
        &self,
        adjuster_id: AdjusterId,
    ) -> Result<AdjusterIntelligence, IntelligenceError> {
        let adjuster = self
            .records
            .adjuster(adjuster_id)
            .await?
            .ok_or(IntelligenceError::AdjusterNotFound(adjuster_id))?;
        let claims = self.records.claims_by_adjuster(adjuster_id).await?;
        let interactions = self.records.interactions_by_adjuster(adjuster_id).await?;

        Ok(self.scoring.score(&adjuster, &claims, &interactions))
    }

    /// Computes carrier-wide intelligence from the current records
    ///
    /// # Errors
    ///
    /// `CarrierNotFound` if no adjuster is attached to the carrier; port
    /// failures pass through.
    #[instrument(skip(self))]
    pub async fn carrier_intelligence(
        &self,
        carrier: &str,
    ) -> Result<CarrierIntelligence, IntelligenceError> {
        let adjusters = self.records.adjusters_by_carrier(carrier).await?;
        if adjusters.is_empty() {
            return Err(IntelligenceError::CarrierNotFound(carrier.to_string()));
        }

        let mut summaries = Vec::with_capacity(adjusters.len());
        let mut all_claims: Vec<Claim> = Vec::new();
        let mut all_interactions: Vec<Interaction> = Vec::new();

        for adjuster in &adjusters {
            let claims = self.records.claims_by_adjuster(adjuster.id).await?;
            let interactions = self.records.interactions_by_adjuster(adjuster.id).await?;

            summaries.push(self.scoring.score(adjuster, &claims, &interactions));
            all_claims.extend(claims);
            all_interactions.extend(interactions);
        }

        Ok(self
            .aggregation
            .aggregate(carrier, &summaries, &all_claims, &all_interactions))
    }
}
