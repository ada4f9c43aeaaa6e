//! Claim outcome classification

use serde::{Deserialize, Serialize};

use domain_records::{Claim, ClaimStatus};
use crate::lexicon::SignalLexicon;

/// Outcome label assigned to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimOutcome {
    /// Closed with a neutral or favorable outcome
    Resolved,
    /// In litigation, or closed on a denial / low-settlement outcome
    Stalled,
    /// Still open
    Open,
}

/// Classifies claims into resolved / stalled / open
///
/// Total: every claim receives exactly one label.
#[derive(Debug, Clone)]
pub struct OutcomeClassifier {
    lexicon: SignalLexicon,
}

impl Default for OutcomeClassifier {
    fn default() -> Self {
        Self::new(SignalLexicon::default())
    }
}

impl OutcomeClassifier {
    /// Creates a classifier over the given ruleset
    pub fn new(lexicon: SignalLexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the ruleset in use
    pub fn lexicon(&self) -> &SignalLexicon {
        &self.lexicon
    }

    /// Assigns the claim its outcome label
    ///
    /// A closed claim with empty or missing outcome text classifies as
    /// `Resolved`: absence of a negative signal is not evidence of friction.
    pub fn classify(&self, claim: &Claim) -> ClaimOutcome {
        match claim.status {
            ClaimStatus::Open => ClaimOutcome::Open,
            ClaimStatus::Litigation => ClaimOutcome::Stalled,
            ClaimStatus::Closed => {
                let denied = claim
                    .outcome
                    .as_deref()
                    .is_some_and(|text| self.lexicon.is_denial_outcome(text));
                if denied {
                    ClaimOutcome::Stalled
                } else {
                    ClaimOutcome::Resolved
                }
            }
        }
    }
}
