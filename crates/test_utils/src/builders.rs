//! Test Data Builders
//!
//! Builder patterns for constructing test records with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::{AdjusterId, ClaimId};
use domain_records::{Adjuster, Claim, ClaimStatus, Interaction, InteractionType};

use crate::fixtures::DateFixtures;

/// Builder for adjuster records
pub struct TestAdjusterBuilder {
    name: String,
    carrier: String,
    region: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl Default for TestAdjusterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAdjusterBuilder {
    /// Creates a builder with generated defaults
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            carrier: CompanyName().fake(),
            region: None,
            phone: None,
            email: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = carrier.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(self) -> Adjuster {
        let mut adjuster = Adjuster::new(self.name, self.carrier);
        adjuster.region = self.region;
        adjuster.phone = self.phone;
        adjuster.email = self.email;
        adjuster
    }
}

/// Builder for claim records
pub struct TestClaimBuilder {
    adjuster_id: AdjusterId,
    carrier: String,
    status: ClaimStatus,
    date_opened: NaiveDate,
    date_closed: Option<NaiveDate>,
    outcome: Option<String>,
}

impl TestClaimBuilder {
    /// Creates a builder for an open claim under the given adjuster
    pub fn for_adjuster(adjuster: &Adjuster) -> Self {
        Self {
            adjuster_id: adjuster.id,
            carrier: adjuster.carrier.clone(),
            status: ClaimStatus::Open,
            date_opened: DateFixtures::opened(),
            date_closed: None,
            outcome: None,
        }
    }

    pub fn opened_on(mut self, date: NaiveDate) -> Self {
        self.date_opened = date;
        self
    }

    /// Closes the claim after the given number of days with an outcome
    pub fn closed_after_days(mut self, days: u64, outcome: impl Into<String>) -> Self {
        self.status = ClaimStatus::Closed;
        self.date_closed = Some(self.date_opened + chrono::Days::new(days));
        self.outcome = Some(outcome.into());
        self
    }

    /// Puts the claim into litigation after the given number of days
    pub fn litigation_after_days(mut self, days: u64) -> Self {
        self.status = ClaimStatus::Litigation;
        self.date_closed = Some(self.date_opened + chrono::Days::new(days));
        self
    }

    pub fn build(self) -> Claim {
        let mut claim = Claim::open(
            self.adjuster_id,
            format!("CLM-{}", &ClaimId::new().as_uuid().simple().to_string()[..7]),
            format!("PRV-{}", &ClaimId::new().as_uuid().simple().to_string()[..7]),
            self.carrier,
            self.date_opened,
        );
        claim.status = self.status;
        claim.date_closed = self.date_closed;
        claim.outcome = self.outcome;
        claim
    }
}

/// Builder for interaction records
pub struct TestInteractionBuilder {
    adjuster_id: AdjusterId,
    claim_id: Option<ClaimId>,
    date: NaiveDate,
    kind: InteractionType,
    description: String,
    outcome: Option<String>,
}

impl TestInteractionBuilder {
    /// Creates a builder for an interaction with the given adjuster
    pub fn for_adjuster(adjuster: &Adjuster) -> Self {
        Self {
            adjuster_id: adjuster.id,
            claim_id: None,
            date: DateFixtures::opened(),
            kind: InteractionType::Email,
            description: "Routine status check".to_string(),
            outcome: None,
        }
    }

    pub fn on_claim(mut self, claim: &Claim) -> Self {
        self.claim_id = Some(claim.id);
        self
    }

    /// Points the interaction at a claim id that is not in the snapshot
    pub fn on_unknown_claim(mut self) -> Self {
        self.claim_id = Some(ClaimId::new());
        self
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn via(mut self, kind: InteractionType) -> Self {
        self.kind = kind;
        self
    }

    pub fn describing(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    pub fn build(self) -> Interaction {
        let mut interaction =
            Interaction::new(self.adjuster_id, self.date, self.kind, self.description);
        interaction.claim_id = self.claim_id;
        interaction.outcome = self.outcome;
        interaction
    }
}
