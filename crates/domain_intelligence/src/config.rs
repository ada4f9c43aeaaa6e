//! Scoring configuration
//!
//! Every threshold, weight, and cut point used by the engines lives here.
//! The defaults are tuned starting values, not fixed law; deployments
//! override them through `SCORING_*` environment variables.

use serde::{Deserialize, Serialize};

/// Thresholds and weights for adjuster scoring and carrier aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the escalation rate in the composite risk score
    pub escalation_weight: f64,
    /// Weight of the stalled-outcome rate
    pub stalled_weight: f64,
    /// Weight of the resolution-time term
    pub resolution_weight: f64,
    /// Weight of the reinspection rate
    pub reinspection_weight: f64,
    /// Rate at which escalation/stalled/reinspection rates saturate to a
    /// full 100 score (0.5 means a 50% rate is maximal signal)
    pub rate_saturation: f64,
    /// Resolution time in days that maps to the full 100 score
    pub resolution_cap_days: f64,
    /// Interaction gap in days at or beyond which responsiveness bottoms out
    pub responsiveness_gap_cap_days: f64,
    /// Average resolution days above which the slow-responder tag applies
    pub slow_responder_days: f64,
    /// Escalations-per-claim rate above which the escalation-prone tag applies
    pub escalation_prone_rate: f64,
    /// Resolved-per-claim rate above which the cooperative tag applies
    pub cooperative_resolved_rate: f64,
    /// Risk below this is high cooperation / low friction
    pub low_risk_cutoff: f64,
    /// Risk below this is moderate cooperation / normal friction
    pub moderate_risk_cutoff: f64,
    /// Carrier average resolution below this many days is Fast
    pub fast_resolution_days: f64,
    /// Carrier average resolution above this many days is Slow
    pub slow_resolution_days: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            escalation_weight: 0.40,
            stalled_weight: 0.30,
            resolution_weight: 0.20,
            reinspection_weight: 0.10,
            rate_saturation: 0.5,
            resolution_cap_days: 365.0,
            responsiveness_gap_cap_days: 30.0,
            slow_responder_days: 120.0,
            escalation_prone_rate: 0.3,
            cooperative_resolved_rate: 0.7,
            low_risk_cutoff: 33.0,
            moderate_risk_cutoff: 66.0,
            fast_resolution_days: 60.0,
            slow_resolution_days: 150.0,
        }
    }
}

impl ScoringConfig {
    /// Loads configuration: defaults overlaid with `SCORING_*` environment
    /// variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::Environment::with_prefix("SCORING"))
            .build()?
            .try_deserialize()
    }
}
