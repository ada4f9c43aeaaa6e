//! Property-Based Test Generators
//!
//! Proptest strategies producing random records that maintain the domain
//! invariants (a closed claim always carries a closed date on or after its
//! open date, an open claim never does).

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::AdjusterId;
use domain_records::{Claim, ClaimStatus, Interaction, InteractionType};

/// Strategy for claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Open),
        Just(ClaimStatus::Closed),
        Just(ClaimStatus::Litigation),
    ]
}

/// Strategy for interaction channels
pub fn interaction_type_strategy() -> impl Strategy<Value = InteractionType> {
    prop_oneof![
        Just(InteractionType::Email),
        Just(InteractionType::Phone),
        Just(InteractionType::InPerson),
        Just(InteractionType::Letter),
        Just(InteractionType::SettlementOffer),
    ]
}

/// Strategy for dates within the tracked window (2020-2025)
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..2000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(offset as u64)
    })
}

/// Strategy for outcome free text, mixing favorable and negative phrasings
pub fn outcome_text_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Full Limits".to_string())),
        Just(Some("Settled within 10%".to_string())),
        Just(Some("Denied - wear and tear exclusion".to_string())),
        Just(Some("Lowball offer accepted under protest".to_string())),
        Just(Some("Partial payment issued".to_string())),
    ]
}

/// Strategy for claims under one adjuster, upholding the closed-date invariant
pub fn claim_strategy(adjuster_id: AdjusterId) -> impl Strategy<Value = Claim> {
    (
        claim_status_strategy(),
        date_strategy(),
        0u64..800,
        outcome_text_strategy(),
    )
        .prop_map(move |(status, date_opened, duration, outcome)| {
            let mut claim = Claim::open(
                adjuster_id,
                "CLM-PROP",
                "PRV-PROP",
                "Propcheck Mutual",
                date_opened,
            );
            if status != ClaimStatus::Open {
                claim.status = status;
                claim.date_closed = Some(date_opened + chrono::Days::new(duration));
                claim.outcome = outcome;
            }
            claim
        })
}

/// Strategy for vectors of claims under one adjuster
pub fn claims_strategy(adjuster_id: AdjusterId) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(claim_strategy(adjuster_id), 0..20)
}

/// Strategy for interactions not tied to any claim
pub fn interaction_strategy(adjuster_id: AdjusterId) -> impl Strategy<Value = Interaction> {
    (interaction_type_strategy(), date_strategy()).prop_map(move |(kind, date)| {
        Interaction::new(adjuster_id, date, kind, "Generated interaction")
    })
}
