//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent and
//! predictable; tests that need variation use the builders or generators
//! instead.

use chrono::NaiveDate;

use domain_access::{Capability, Session};
use domain_records::{Adjuster, Claim, ClaimStatus, Interaction, InteractionType};

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard claim open date (Jan 15, 2023)
    pub fn opened() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
    }

    /// Close date 64 days after [`DateFixtures::opened`]
    pub fn closed_fast() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 20).unwrap()
    }

    /// Close date 200 days after [`DateFixtures::opened`]
    pub fn closed_slow() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, 3).unwrap()
    }

    /// A date offset in days from [`DateFixtures::opened`]
    pub fn days_after_open(days: u64) -> NaiveDate {
        Self::opened() + chrono::Days::new(days)
    }
}

/// Fixture for adjuster records
pub struct AdjusterFixtures;

impl AdjusterFixtures {
    /// An easy-to-work-with adjuster
    pub fn cooperative() -> Adjuster {
        let mut adjuster = Adjuster::new("Dana Reeves", "Lakeshore Mutual");
        adjuster.region = Some("TX".to_string());
        adjuster.risk_impression = Some("Reasonable, pays on solid documentation".to_string());
        adjuster
    }

    /// A difficult adjuster with heavy delay tactics
    pub fn adversarial() -> Adjuster {
        let mut adjuster = Adjuster::new("Marcus Cole", "Granite State Insurance");
        adjuster.region = Some("FL".to_string());
        adjuster.risk_impression =
            Some("Ignores correspondence for weeks, expect litigation".to_string());
        adjuster
    }
}

/// Fixture for claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// An open claim for the given adjuster
    pub fn open(adjuster: &Adjuster) -> Claim {
        Claim::open(
            adjuster.id,
            "CLM-0004255",
            "SF-992-999",
            adjuster.carrier.clone(),
            DateFixtures::opened(),
        )
    }

    /// A claim closed in 64 days with a favorable outcome
    pub fn resolved(adjuster: &Adjuster) -> Claim {
        let mut claim = Self::open(adjuster);
        claim.status = ClaimStatus::Closed;
        claim.date_closed = Some(DateFixtures::closed_fast());
        claim.outcome = Some("Settled within 10%".to_string());
        claim
    }

    /// A claim closed in 200 days on a denial
    pub fn denied(adjuster: &Adjuster) -> Claim {
        let mut claim = Self::open(adjuster);
        claim.status = ClaimStatus::Closed;
        claim.date_closed = Some(DateFixtures::closed_slow());
        claim.outcome = Some("Denied - pre-existing damage".to_string());
        claim
    }
}

/// Fixture for interaction records
pub struct InteractionFixtures;

impl InteractionFixtures {
    /// A routine email interaction
    pub fn routine(adjuster: &Adjuster, date: NaiveDate) -> Interaction {
        Interaction::new(
            adjuster.id,
            date,
            InteractionType::Email,
            "Sent status request",
        )
    }

    /// An escalation interaction tied to a claim
    pub fn escalation(claim: &Claim, date: NaiveDate) -> Interaction {
        Interaction::new(
            claim.adjuster_id,
            date,
            InteractionType::Letter,
            "Filed DOI complaint over unreasonable delay",
        )
        .with_claim(claim.id)
    }

    /// A supplement request with an approved outcome
    pub fn approved_supplement(claim: &Claim, date: NaiveDate) -> Interaction {
        Interaction::new(
            claim.adjuster_id,
            date,
            InteractionType::Email,
            "Submitted supplement for roof decking",
        )
        .with_claim(claim.id)
        .with_outcome("Supplement approved in full")
    }
}

/// Fixture for session state
pub struct SessionFixtures;

impl SessionFixtures {
    pub fn team_admin() -> Session {
        Session::team(Capability::Admin)
    }

    pub fn team_viewer() -> Session {
        Session::team(Capability::Viewer)
    }

    pub fn individual() -> Session {
        Session::individual()
    }

    pub fn anonymous() -> Session {
        Session::anonymous()
    }
}
