//! Wire-format tests for intelligence objects
//!
//! The embedding HTTP layer serializes these objects directly, so field
//! names stay camelCase and pattern tags stay kebab-case.

use domain_intelligence::{AdjusterScoringEngine, CarrierAggregationEngine, PatternTag};
use test_utils::builders::{TestAdjusterBuilder, TestClaimBuilder};

#[test]
fn test_adjuster_intelligence_serializes_camel_case() {
    let adjuster = TestAdjusterBuilder::new().with_carrier("Harbor Mutual").build();
    let claims = vec![
        TestClaimBuilder::for_adjuster(&adjuster)
            .closed_after_days(80, "Full Limits")
            .build(),
    ];

    let intel = AdjusterScoringEngine::default().score(&adjuster, &claims, &[]);
    let json = serde_json::to_value(&intel).unwrap();

    assert!(json.get("avgDaysToResolution").is_some());
    assert!(json.get("totalClaims").is_some());
    assert!(json.get("riskScore").is_some());
    assert!(json.get("cooperationLevel").is_some());
    // No-data fields serialize as explicit nulls, not zeros
    assert!(json.get("responsivenessScore").unwrap().is_null());
    assert!(json.get("supplementApprovalRate").unwrap().is_null());
}

#[test]
fn test_pattern_tags_serialize_kebab_case() {
    assert_eq!(
        serde_json::to_string(&PatternTag::SlowResponder).unwrap(),
        "\"slow-responder\""
    );
    assert_eq!(
        serde_json::to_string(&PatternTag::EscalationProne).unwrap(),
        "\"escalation-prone\""
    );
    assert_eq!(PatternTag::Cooperative.to_string(), "cooperative");
}

#[test]
fn test_carrier_intelligence_serializes_camel_case() {
    let intel = CarrierAggregationEngine::default().aggregate("Harbor Mutual", &[], &[], &[]);
    let json = serde_json::to_value(&intel).unwrap();

    assert!(json.get("totalAdjusters").is_some());
    assert!(json.get("frictionLevel").unwrap().is_null());
    assert!(json.get("escalationEffectiveness").unwrap().is_null());
    assert!(json.get("resolutionTendency").unwrap().is_null());
}
