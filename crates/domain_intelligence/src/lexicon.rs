//! Signal lexicon
//!
//! Free-text classification (escalation detection, denial outcomes,
//! supplements) runs against an explicit, versioned keyword ruleset rather
//! than string checks scattered through the scoring code. The whole set is
//! serde-deserializable so rules can be tuned or replaced without touching
//! aggregation logic.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use domain_records::Interaction;

static V1: Lazy<SignalLexicon> = Lazy::new(SignalLexicon::default);

/// Versioned keyword ruleset for free-text classification
///
/// All matching is case-insensitive substring matching over description and
/// outcome text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalLexicon {
    /// Ruleset version, carried so tuned rulesets are distinguishable
    pub version: String,
    /// Markers indicating regulatory or legal pressure was invoked
    pub escalation_markers: Vec<String>,
    /// Markers indicating a reinspection was requested or performed
    pub reinspection_markers: Vec<String>,
    /// Markers indicating a denial or low-settlement outcome
    pub denial_markers: Vec<String>,
    /// Markers indicating a supplement request
    pub supplement_markers: Vec<String>,
    /// Markers indicating an approval, applied to outcome text
    pub approval_markers: Vec<String>,
}

impl Default for SignalLexicon {
    fn default() -> Self {
        let markers = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            version: "v1".to_string(),
            escalation_markers: markers(&[
                "doi complaint",
                "department of insurance",
                "bad faith",
                "litigation",
                "attorney letter",
                "demand letter follow-up",
            ]),
            reinspection_markers: markers(&["reinspection", "re-inspect"]),
            denial_markers: markers(&[
                "denied",
                "denial",
                "lowball",
                "below policy limits",
                "low settlement",
            ]),
            supplement_markers: markers(&["supplement"]),
            approval_markers: markers(&["approved", "accepted", "paid"]),
        }
    }
}

impl SignalLexicon {
    /// Returns the shared default ruleset
    pub fn v1() -> &'static SignalLexicon {
        &V1
    }

    /// Returns true if the interaction indicates an escalation
    pub fn is_escalation(&self, interaction: &Interaction) -> bool {
        self.matches_interaction(&self.escalation_markers, interaction)
    }

    /// Returns true if the interaction indicates a reinspection
    pub fn is_reinspection(&self, interaction: &Interaction) -> bool {
        self.matches_interaction(&self.reinspection_markers, interaction)
    }

    /// Returns true if the interaction records a supplement request
    pub fn is_supplement(&self, interaction: &Interaction) -> bool {
        self.matches_interaction(&self.supplement_markers, interaction)
    }

    /// Returns true if outcome text reads as a denial or low settlement
    pub fn is_denial_outcome(&self, text: &str) -> bool {
        Self::matches(&self.denial_markers, text)
    }

    /// Returns true if outcome text reads as an approval
    pub fn indicates_approval(&self, text: &str) -> bool {
        Self::matches(&self.approval_markers, text)
    }

    fn matches_interaction(&self, markers: &[String], interaction: &Interaction) -> bool {
        Self::matches(markers, &interaction.description)
            || interaction
                .outcome
                .as_deref()
                .is_some_and(|outcome| Self::matches(markers, outcome))
    }

    fn matches(markers: &[String], text: &str) -> bool {
        let text = text.to_lowercase();
        markers.iter().any(|marker| text.contains(marker.as_str()))
    }
}
