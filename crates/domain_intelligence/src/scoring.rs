//! Adjuster scoring engine
//!
//! Aggregates one adjuster's claims and interaction log into an
//! [`AdjusterIntelligence`] summary. Pure over its inputs; the only side
//! effect is a warning log when an interaction references a claim missing
//! from the snapshot (such interactions are skipped, never fatal).

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::AdjusterId;
use domain_records::{Adjuster, Claim, Interaction};

use crate::classifier::{ClaimOutcome, OutcomeClassifier};
use crate::config::ScoringConfig;

/// Qualitative label derived from threshold rules
///
/// Tags are independent; zero or more can apply. Output order follows the
/// declaration order here, a fixed priority list, not match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternTag {
    SlowResponder,
    EscalationProne,
    Cooperative,
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PatternTag::SlowResponder => "slow-responder",
            PatternTag::EscalationProne => "escalation-prone",
            PatternTag::Cooperative => "cooperative",
        };
        f.write_str(label)
    }
}

/// How workable an adjuster is, derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CooperationLevel {
    High,
    Moderate,
    Low,
}

impl CooperationLevel {
    /// Maps a 0-100 risk score onto a cooperation level
    pub fn from_risk(risk: f64, config: &ScoringConfig) -> Self {
        if risk < config.low_risk_cutoff {
            CooperationLevel::High
        } else if risk < config.moderate_risk_cutoff {
            CooperationLevel::Moderate
        } else {
            CooperationLevel::Low
        }
    }

    /// Ordinal rank: `High` > `Moderate` > `Low`
    pub fn rank(&self) -> u8 {
        match self {
            CooperationLevel::High => 2,
            CooperationLevel::Moderate => 1,
            CooperationLevel::Low => 0,
        }
    }
}

/// Derived per-adjuster analytics
///
/// A transient computation result, recomputed on every query and never
/// persisted. Every numeric field with an empty denominator is `None`,
/// keeping "no signal" distinct from "signal of zero".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjusterIntelligence {
    pub adjuster_id: AdjusterId,
    pub carrier: String,
    pub total_interactions: usize,
    pub total_claims: usize,
    pub escalation_count: usize,
    pub reinspection_count: usize,
    /// Mean days from open to close across claims with both dates set
    pub avg_days_to_resolution: Option<f64>,
    pub outcomes_resolved: usize,
    pub outcomes_stalled: usize,
    pub outcomes_open: usize,
    /// Fixed-priority list of threshold-derived labels
    pub pattern_tags: Vec<PatternTag>,
    /// 0-100 composite, higher is more adversarial
    pub risk_score: Option<f64>,
    /// 0-100, inverse of the average gap between successive interactions
    pub responsiveness_score: Option<f64>,
    pub cooperation_level: Option<CooperationLevel>,
    /// Percentage of supplement requests that were approved
    pub supplement_approval_rate: Option<f64>,
    pub avg_interactions_per_claim: Option<f64>,
}

/// Scores one adjuster's records into an [`AdjusterIntelligence`]
#[derive(Debug, Clone)]
pub struct AdjusterScoringEngine {
    classifier: OutcomeClassifier,
    config: ScoringConfig,
}

impl Default for AdjusterScoringEngine {
    fn default() -> Self {
        Self::new(OutcomeClassifier::default(), ScoringConfig::default())
    }
}

impl AdjusterScoringEngine {
    /// Creates an engine over the given classifier and configuration
    pub fn new(classifier: OutcomeClassifier, config: ScoringConfig) -> Self {
        Self { classifier, config }
    }

    pub fn classifier(&self) -> &OutcomeClassifier {
        &self.classifier
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores an adjuster from a snapshot of their claims and interactions
    ///
    /// Interactions referencing a claim absent from `claims` are logged and
    /// excluded from every statistic; aggregation proceeds on the remaining
    /// valid data.
    pub fn score(
        &self,
        adjuster: &Adjuster,
        claims: &[Claim],
        interactions: &[Interaction],
    ) -> AdjusterIntelligence {
        let lexicon = self.classifier.lexicon();
        let known: HashSet<_> = claims.iter().map(|c| c.id).collect();

        let valid: Vec<&Interaction> = interactions
            .iter()
            .filter(|interaction| match interaction.claim_id {
                Some(claim_id) if !known.contains(&claim_id) => {
                    warn!(
                        interaction = %interaction.id,
                        claim = %claim_id,
                        adjuster = %adjuster.id,
                        "interaction references a claim missing from the snapshot, skipping"
                    );
                    false
                }
                _ => true,
            })
            .collect();

        let total_interactions = valid.len();
        let total_claims = claims.len();

        let escalation_count = valid.iter().filter(|i| lexicon.is_escalation(i)).count();
        let reinspection_count = valid.iter().filter(|i| lexicon.is_reinspection(i)).count();

        let mut outcomes_resolved = 0;
        let mut outcomes_stalled = 0;
        let mut outcomes_open = 0;
        for claim in claims {
            match self.classifier.classify(claim) {
                ClaimOutcome::Resolved => outcomes_resolved += 1,
                ClaimOutcome::Stalled => outcomes_stalled += 1,
                ClaimOutcome::Open => outcomes_open += 1,
            }
        }

        let avg_days_to_resolution = mean_days_to_resolution(claims);

        let risk_score = composite_risk(
            escalation_count,
            outcomes_stalled,
            reinspection_count,
            total_claims,
            total_interactions,
            avg_days_to_resolution,
            &self.config,
        );
        let cooperation_level =
            risk_score.map(|risk| CooperationLevel::from_risk(risk, &self.config));

        let supplements: Vec<&&Interaction> =
            valid.iter().filter(|i| lexicon.is_supplement(i)).collect();
        let supplement_approval_rate = if supplements.is_empty() {
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

        let avg_interactions_per_claim = if total_claims == 0 {
            None
        } else {
            Some(total_interactions as f64 / total_claims as f64)
        };

        let pattern_tags = self.pattern_tags(
            avg_days_to_resolution,
            escalation_count,
            outcomes_resolved,
            total_claims,
        );

        AdjusterIntelligence {
            adjuster_id: adjuster.id,
            carrier: adjuster.carrier.clone(),
            total_interactions,
            total_claims,
            escalation_count,
            reinspection_count,
            avg_days_to_resolution,
            outcomes_resolved,
            outcomes_stalled,
            outcomes_open,
            pattern_tags,
            risk_score,
            responsiveness_score: self.responsiveness(&valid),
            cooperation_level,
            supplement_approval_rate,
            avg_interactions_per_claim,
        }
    }

    /// Inverse function of the average gap between successive interactions
    ///
    /// `None` with fewer than two interactions: a single interaction has no
    /// gap, and no data must stay distinct from a real low score.
    fn responsiveness(&self, interactions: &[&Interaction]) -> Option<f64> {
        if interactions.len() < 2 {
            return None;
        }
        let mut dates: Vec<NaiveDate> = interactions.iter().map(|i| i.date).collect();
        dates.sort_unstable();

        let total_gap_days: i64 = dates
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_days())
            .sum();
        let avg_gap = total_gap_days as f64 / (dates.len() - 1) as f64;

        let ratio = (avg_gap / self.config.responsiveness_gap_cap_days).clamp(0.0, 1.0);
        Some((1.0 - ratio) * 100.0)
    }

    fn pattern_tags(
        &self,
        avg_days_to_resolution: Option<f64>,
        escalation_count: usize,
        outcomes_resolved: usize,
        total_claims: usize,
    ) -> Vec<PatternTag> {
        let mut tags = Vec::new();

        if avg_days_to_resolution.is_some_and(|days| days > self.config.slow_responder_days) {
            tags.push(PatternTag::SlowResponder);
        }
        if total_claims > 0 {
            let escalation_rate = escalation_count as f64 / total_claims as f64;
            if escalation_rate > self.config.escalation_prone_rate {
                tags.push(PatternTag::EscalationProne);
            }
            let resolved_rate = outcomes_resolved as f64 / total_claims as f64;
            if resolved_rate > self.config.cooperative_resolved_rate && escalation_count == 0 {
                tags.push(PatternTag::Cooperative);
            }
        }
        tags
    }
}

/// Mean of `(date_closed - date_opened)` across claims with both dates set
pub(crate) fn mean_days_to_resolution(claims: &[Claim]) -> Option<f64> {
    let durations: Vec<i64> = claims.iter().filter_map(|c| c.days_to_resolution()).collect();
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<i64>() as f64 / durations.len() as f64)
}

/// Weighted composite risk over normalized signal terms
///
/// Rates are normalized against `rate_saturation`, resolution time against
/// `resolution_cap_days`, each term clamped to [0, 100] before weighting.
/// Rate denominators prefer the claim count, falling back to the interaction
/// count for adjusters with logged interactions but no claims yet. When the
/// resolution-time term is undefined the remaining weights are renormalized
/// rather than counting missing data as speed. `None` only when there is
/// nothing at all to score.
pub(crate) fn composite_risk(
    escalations: usize,
    stalled: usize,
    reinspections: usize,
    total_claims: usize,
    total_interactions: usize,
    avg_days_to_resolution: Option<f64>,
    config: &ScoringConfig,
) -> Option<f64> {
    let scope = if total_claims > 0 {
        total_claims
    } else {
        total_interactions
    };
    if scope == 0 {
        return None;
    }
    let scope = scope as f64;
    let rate_term =
        |count: usize| ((count as f64 / scope) / config.rate_saturation * 100.0).clamp(0.0, 100.0);

    let mut weighted = config.escalation_weight * rate_term(escalations)
        + config.stalled_weight * rate_term(stalled)
        + config.reinspection_weight * rate_term(reinspections);
    let mut weight_total =
        config.escalation_weight + config.stalled_weight + config.reinspection_weight;

    if let Some(days) = avg_days_to_resolution {
        let days_term = (days / config.resolution_cap_days * 100.0).clamp(0.0, 100.0);
        weighted += config.resolution_weight * days_term;
        weight_total += config.resolution_weight;
    }

    Some((weighted / weight_total).clamp(0.0, 100.0))
}
