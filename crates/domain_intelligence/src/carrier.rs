//! Carrier aggregation engine
//!
//! Rolls one carrier's adjusters, claims, and interactions up into a
//! [`CarrierIntelligence`] summary. Carrier-wide means are computed directly
//! from the claim/interaction union rather than averaging per-adjuster
//! averages, so small adjusters are not weighted equally with large ones.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::ClaimId;
use domain_records::{Claim, Interaction};

use crate::classifier::{ClaimOutcome, OutcomeClassifier};
use crate::config::ScoringConfig;
use crate::scoring::{composite_risk, mean_days_to_resolution, AdjusterIntelligence};

/// How adversarial claim handling at a carrier tends to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrictionLevel {
    Low,
    Normal,
    High,
}

impl FrictionLevel {
    /// Maps a 0-100 aggregate risk score onto a friction level
    ///
    /// Same cut points as cooperation, inverted polarity: low risk is low
    /// friction.
    pub fn from_risk(risk: f64, config: &ScoringConfig) -> Self {
        if risk < config.low_risk_cutoff {
            FrictionLevel::Low
        } else if risk < config.moderate_risk_cutoff {
            FrictionLevel::Normal
        } else {
            FrictionLevel::High
        }
    }
}

/// How quickly a carrier's claims tend to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionTendency {
    Fast,
    Normal,
    Slow,
}

impl ResolutionTendency {
    /// Maps an average resolution time onto a tendency band
    pub fn from_days(days: f64, config: &ScoringConfig) -> Self {
        if days < config.fast_resolution_days {
            ResolutionTendency::Fast
        } else if days > config.slow_resolution_days {
            ResolutionTendency::Slow
        } else {
            ResolutionTendency::Normal
        }
    }
}

/// Derived carrier-wide analytics
///
/// Like [`AdjusterIntelligence`], a transient computation result. "No data"
/// is always `None`, never `0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierIntelligence {
    pub carrier: String,
    pub total_adjusters: usize,
    pub total_claims: usize,
    pub avg_interactions_per_claim: Option<f64>,
    pub avg_days_to_resolution: Option<f64>,
    /// Of claims with an escalation interaction, the percentage that ended resolved
    pub escalation_effectiveness: Option<f64>,
    /// Of claims with a reinspection interaction, the percentage that ended resolved
    pub reinspection_win_rate: Option<f64>,
    pub friction_level: Option<FrictionLevel>,
    pub resolution_tendency: Option<ResolutionTendency>,
    /// Carrier-level composite risk over the union of the carrier's records
    pub risk_score: Option<f64>,
    /// Percentage of supplement requests across the carrier that were approved
    pub supplement_success_rate: Option<f64>,
}

/// Aggregates per-adjuster intelligence and raw records for one carrier
#[derive(Debug, Clone)]
pub struct CarrierAggregationEngine {
    classifier: OutcomeClassifier,
    config: ScoringConfig,
}

impl Default for CarrierAggregationEngine {
    fn default() -> Self {
        Self::new(OutcomeClassifier::default(), ScoringConfig::default())
    }
}

impl CarrierAggregationEngine {
    /// Creates an engine over the given classifier and configuration
    pub fn new(classifier: OutcomeClassifier, config: ScoringConfig) -> Self {
        Self { classifier, config }
    }

    /// Aggregates one carrier's scope into a [`CarrierIntelligence`]
    ///
    /// `adjusters` are the already-scored summaries of the carrier's
    /// adjusters; `claims` and `interactions` are the raw union of their
    /// records, needed for claim-weighted means and escalation outcomes.
    pub fn aggregate(
        &self,
        carrier: &str,
        adjusters: &[AdjusterIntelligence],
        claims: &[Claim],
        interactions: &[Interaction],
    ) -> CarrierIntelligence {
        let lexicon = self.classifier.lexicon();
        let known: HashSet<_> = claims.iter().map(|c| c.id).collect();

        let valid: Vec<&Interaction> = interactions
            .iter()
            .filter(|interaction| match interaction.claim_id {
                Some(claim_id) if !known.contains(&claim_id) => {
                    warn!(
                        interaction = %interaction.id,
                        claim = %claim_id,
                        carrier,
                        "interaction references a claim missing from the snapshot, skipping"
                    );
                    false
                }
                _ => true,
            })
            .collect();

        let total_claims = claims.len();
        let avg_interactions_per_claim = if total_claims == 0 {
            None
        } else {
            Some(valid.len() as f64 / total_claims as f64)
        };
        let avg_days_to_resolution = mean_days_to_resolution(claims);

        let escalation_count = valid.iter().filter(|i| lexicon.is_escalation(i)).count();
        let reinspection_count = valid.iter().filter(|i| lexicon.is_reinspection(i)).count();
        let stalled = claims
            .iter()
            .filter(|c| self.classifier.classify(c) == ClaimOutcome::Stalled)
            .count();

        let risk_score = composite_risk(
            escalation_count,
            stalled,
            reinspection_count,
            total_claims,
            valid.len(),
            avg_days_to_resolution,
            &self.config,
        );

        let friction_level = mean_adjuster_risk(adjusters)
            .map(|risk| FrictionLevel::from_risk(risk, &self.config));
        let resolution_tendency = avg_days_to_resolution
            .map(|days| ResolutionTendency::from_days(days, &self.config));

        let escalation_effectiveness = self.resolved_share(claims, &valid, |i| {
            lexicon.is_escalation(i)
        });
        let reinspection_win_rate = self.resolved_share(claims, &valid, |i| {
            lexicon.is_reinspection(i)
        });

        let supplements: Vec<&&Interaction> =
            valid.iter().filter(|i| lexicon.is_supplement(i)).collect();
        let supplement_success_rate = if supplements.is_empty() {
            None
        } else {
            let approved = supplements
                .iter()
                .filter(|i| {
                    i.outcome
                        .as_deref()
                        .is_some_and(|text| lexicon.indicates_approval(text))
                })
                .count();
            Some(approved as f64 / supplements.len() as f64 * 100.0)
        };

        CarrierIntelligence {
            carrier: carrier.to_string(),
            total_adjusters: adjusters.len(),
            total_claims,
            avg_interactions_per_claim,
            avg_days_to_resolution,
            escalation_effectiveness,
            reinspection_win_rate,
            friction_level,
            resolution_tendency,
            risk_score,
            supplement_success_rate,
        }
    }

    /// Of claims touched by a matching interaction, the percentage that
    /// classified resolved; `None` when no claim was touched
    fn resolved_share(
        &self,
        claims: &[Claim],
        interactions: &[&Interaction],
        matching: impl Fn(&Interaction) -> bool,
    ) -> Option<f64> {
        let touched: HashSet<ClaimId> = interactions
            .iter()
            .filter(|i| matching(i))
            .filter_map(|i| i.claim_id)
            .collect();
        if touched.is_empty() {
            return None;
        }

        let scoped: Vec<&Claim> = claims.iter().filter(|c| touched.contains(&c.id)).collect();
        if scoped.is_empty() {
            return None;
        }
        let resolved = scoped
            .iter()
            .filter(|c| self.classifier.classify(c) == ClaimOutcome::Resolved)
            .count();
        Some(resolved as f64 / scoped.len() as f64 * 100.0)
    }
}

fn mean_adjuster_risk(adjusters: &[AdjusterIntelligence]) -> Option<f64> {
    let risks: Vec<f64> = adjusters.iter().filter_map(|a| a.risk_score).collect();
    if risks.is_empty() {
        return None;
    }
    Some(risks.iter().sum::<f64>() / risks.len() as f64)
}
