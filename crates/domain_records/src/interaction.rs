//! Interaction log entries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AdjusterId, ClaimId, InteractionId};

/// How the interaction took place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionType {
    Email,
    Phone,
    #[serde(rename = "In-Person")]
    InPerson,
    Letter,
    #[serde(rename = "Settlement Offer")]
    SettlementOffer,
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InteractionType::Email => "Email",
            InteractionType::Phone => "Phone",
            InteractionType::InPerson => "In-Person",
            InteractionType::Letter => "Letter",
            InteractionType::SettlementOffer => "Settlement Offer",
        };
        f.write_str(label)
    }
}

/// One logged interaction with an adjuster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Unique identifier
    pub id: InteractionId,
    /// Adjuster the interaction was with
    pub adjuster_id: AdjusterId,
    /// Claim the interaction concerned, when tied to one
    pub claim_id: Option<ClaimId>,
    /// Date the interaction happened
    pub date: NaiveDate,
    /// Channel
    pub kind: InteractionType,
    /// What happened
    pub description: String,
    /// How the adjuster responded, if known yet
    pub outcome: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Creates a new interaction log entry
    pub fn new(
        adjuster_id: AdjusterId,
        date: NaiveDate,
        kind: InteractionType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: InteractionId::new(),
            adjuster_id,
            claim_id: None,
            date,
            kind,
            description: description.into(),
            outcome: None,
            created_at: Utc::now(),
        }
    }

    /// Ties the interaction to a claim
    pub fn with_claim(mut self, claim_id: ClaimId) -> Self {
        self.claim_id = Some(claim_id);
        self
    }

    /// Records the adjuster's response
    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }
}
