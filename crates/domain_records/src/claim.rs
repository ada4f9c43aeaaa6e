//! Claim records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AdjusterId, ClaimId};
use crate::error::RecordError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Claim is open and being worked
    Open,
    /// Claim reached a final disposition
    Closed,
    /// Claim is in active litigation
    Litigation,
}

/// A claim tracked against one adjuster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Adjuster handling the claim
    pub adjuster_id: AdjusterId,
    /// Public display number, e.g. "CLM-0004219"
    pub public_id: String,
    /// Real carrier claim number; masked for lower access tiers
    pub private_id: String,
    /// Carrier name (denormalized)
    pub carrier: String,
    /// Status
    pub status: ClaimStatus,
    /// Date the claim was opened
    pub date_opened: NaiveDate,
    /// Date the claim left the open state; set iff status is not Open
    pub date_closed: Option<NaiveDate>,
    /// Free-text outcome, e.g. "Full Limits", "Denied", "Settled within 10%"
    pub outcome: Option<String>,
    /// Notes on what moved the claim, kept for long-running claims
    pub what_worked: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new open claim
    pub fn open(
        adjuster_id: AdjusterId,
        public_id: impl Into<String>,
        private_id: impl Into<String>,
        carrier: impl Into<String>,
        date_opened: NaiveDate,
    ) -> Self {
        Self {
            id: ClaimId::new(),
            adjuster_id,
            public_id: public_id.into(),
            private_id: private_id.into(),
            carrier: carrier.into(),
            status: ClaimStatus::Open,
            date_opened,
            date_closed: None,
            outcome: None,
            what_worked: None,
            created_at: Utc::now(),
        }
    }

    /// Moves the claim into a terminal or litigation state
    pub fn transition(
        &mut self,
        status: ClaimStatus,
        date_closed: NaiveDate,
        outcome: Option<String>,
    ) -> Result<(), RecordError> {
        if !self.can_transition_to(status) {
            return Err(RecordError::InvalidStatusTransition {
                from: self.status,
                to: status,
            });
        }
        if date_closed < self.date_opened {
            return Err(RecordError::ClosedBeforeOpened(self.public_id.clone()));
        }
        self.status = status;
        self.date_closed = Some(date_closed);
        if outcome.is_some() {
            self.outcome = outcome;
        }
        Ok(())
    }

    /// Checks the record-level invariants
    ///
    /// A closed or litigating claim must carry a closed date; an open claim
    /// must not. The closed date can never precede the open date.
    pub fn validate(&self) -> Result<(), RecordError> {
        match (self.status, self.date_closed) {
            (ClaimStatus::Open, Some(_)) => {
                Err(RecordError::UnexpectedClosedDate(self.public_id.clone()))
            }
            (ClaimStatus::Closed | ClaimStatus::Litigation, None) => {
                Err(RecordError::MissingClosedDate(self.public_id.clone()))
            }
            (_, Some(closed)) if closed < self.date_opened => {
                Err(RecordError::ClosedBeforeOpened(self.public_id.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Days from open to close; `None` while either date is missing
    pub fn days_to_resolution(&self) -> Option<i64> {
        self.date_closed
            .map(|closed| (closed - self.date_opened).num_days())
    }

    /// Returns true once the claim has left the open state
    pub fn is_closed(&self) -> bool {
        self.status != ClaimStatus::Open
    }

    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Open, Closed) | (Open, Litigation) | (Litigation, Closed)
        )
    }
}
