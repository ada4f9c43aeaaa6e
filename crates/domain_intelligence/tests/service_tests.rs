//! Tests for the intelligence service over the records port

use core_kernel::AdjusterId;
use domain_intelligence::{IntelligenceError, IntelligenceService};
use test_utils::builders::{TestAdjusterBuilder, TestClaimBuilder, TestInteractionBuilder};
use test_utils::memory::InMemoryRecords;

fn seeded_records() -> (InMemoryRecords, AdjusterId) {
    let mut records = InMemoryRecords::new();

    let adjuster = TestAdjusterBuilder::new()
        .with_name("Dana Reeves")
        .with_carrier("Lakeshore Mutual")
        .build();
    let adjuster_id = adjuster.id;

    let resolved = TestClaimBuilder::for_adjuster(&adjuster)
        .closed_after_days(40, "Full Limits")
        .build();
    let open = TestClaimBuilder::for_adjuster(&adjuster).build();
    let interaction = TestInteractionBuilder::for_adjuster(&adjuster)
        .on_claim(&resolved)
        .describing("Sent demand package")
        .build();

    records.seed(adjuster, vec![resolved, open], vec![interaction]);
    (records, adjuster_id)
}

#[tokio::test]
async fn test_adjuster_intelligence_over_seeded_records() {
    let (records, adjuster_id) = seeded_records();
    let service = IntelligenceService::new(records);

    let intel = service.adjuster_intelligence(adjuster_id).await.unwrap();

    assert_eq!(intel.adjuster_id, adjuster_id);
    assert_eq!(intel.total_claims, 2);
    assert_eq!(intel.total_interactions, 1);
    assert_eq!(intel.outcomes_resolved, 1);
    assert_eq!(intel.outcomes_open, 1);
    assert_eq!(intel.avg_days_to_resolution, Some(40.0));
}

#[tokio::test]
async fn test_unknown_adjuster_is_not_found() {
    let (records, _) = seeded_records();
    let service = IntelligenceService::new(records);

    let result = service.adjuster_intelligence(AdjusterId::new()).await;
    assert!(matches!(
        result,
        Err(IntelligenceError::AdjusterNotFound(_))
    ));
}

#[tokio::test]
async fn test_carrier_intelligence_over_seeded_records() {
    let (records, _) = seeded_records();
    let service = IntelligenceService::new(records);

    let intel = service.carrier_intelligence("Lakeshore Mutual").await.unwrap();

    assert_eq!(intel.carrier, "Lakeshore Mutual");
    assert_eq!(intel.total_adjusters, 1);
    assert_eq!(intel.total_claims, 2);
}

#[tokio::test]
async fn test_unknown_carrier_is_not_found() {
    let (records, _) = seeded_records();
    let service = IntelligenceService::new(records);

    let result = service.carrier_intelligence("No Such Carrier").await;
    assert!(matches!(result, Err(IntelligenceError::CarrierNotFound(_))));
}

#[tokio::test]
async fn test_intelligence_is_recomputed_per_call() {
    let (records, adjuster_id) = seeded_records();
    let service = IntelligenceService::new(records);

    let first = service.adjuster_intelligence(adjuster_id).await.unwrap();
    let second = service.adjuster_intelligence(adjuster_id).await.unwrap();

    // Pure over the snapshot: identical inputs, identical outputs
    assert_eq!(first.risk_score, second.risk_score);
    assert_eq!(first.pattern_tags, second.pattern_tags);
}
