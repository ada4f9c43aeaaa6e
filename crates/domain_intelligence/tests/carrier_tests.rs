//! Tests for the carrier aggregation engine

use domain_intelligence::{
    AdjusterScoringEngine, CarrierAggregationEngine, FrictionLevel, ResolutionTendency,
    ScoringConfig,
};
use test_utils::builders::{TestAdjusterBuilder, TestClaimBuilder, TestInteractionBuilder};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_empty_carrier_scope_reports_no_data() {
    let engine = CarrierAggregationEngine::default();
    let intel = engine.aggregate("Lakeshore Mutual", &[], &[], &[]);

    assert_eq!(intel.total_adjusters, 0);
    assert_eq!(intel.total_claims, 0);
    assert_eq!(intel.avg_interactions_per_claim, None);
    assert_eq!(intel.avg_days_to_resolution, None);
    assert_eq!(intel.escalation_effectiveness, None);
    assert_eq!(intel.reinspection_win_rate, None);
    assert_eq!(intel.friction_level, None);
    assert_eq!(intel.resolution_tendency, None);
    assert_eq!(intel.risk_score, None);
    assert_eq!(intel.supplement_success_rate, None);
}

#[test]
fn test_single_adjuster_carrier_matches_the_adjuster_score() {
    let adjuster = TestAdjusterBuilder::new()
        .with_carrier("Granite State Insurance")
        .build();
    let claims = vec![
        TestClaimBuilder::for_adjuster(&adjuster)
            .closed_after_days(40, "Full Limits")
            .build(),
        TestClaimBuilder::for_adjuster(&adjuster)
            .closed_after_days(90, "Denied - exclusion")
            .build(),
        TestClaimBuilder::for_adjuster(&adjuster).build(),
    ];
    let interactions = vec![
        TestInteractionBuilder::for_adjuster(&adjuster)
            .describing("Filed DOI complaint")
            .on_claim(&claims[0])
            .build(),
        TestInteractionBuilder::for_adjuster(&adjuster)
            .describing("Routine status call")
            .build(),
    ];

    let scoring = AdjusterScoringEngine::default();
    let summary = scoring.score(&adjuster, &claims, &interactions);

    let aggregation = CarrierAggregationEngine::default();
    let carrier = aggregation.aggregate(
        "Granite State Insurance",
        std::slice::from_ref(&summary),
        &claims,
        &interactions,
    );

    // No double-weighting: the carrier over one adjuster's full data is that
    // adjuster's own scores
    assert_eq!(carrier.total_adjusters, 1);
    assert_eq!(carrier.total_claims, summary.total_claims);
    assert_close(
        carrier.avg_days_to_resolution.unwrap(),
        summary.avg_days_to_resolution.unwrap(),
    );
    assert_close(
        carrier.avg_interactions_per_claim.unwrap(),
        summary.avg_interactions_per_claim.unwrap(),
    );
    assert_close(carrier.risk_score.unwrap(), summary.risk_score.unwrap());
}

#[test]
fn test_escalation_effectiveness_counts_resolved_escalated_claims() {
    let adjuster = TestAdjusterBuilder::new()
        .with_carrier("Lakeshore Mutual")
        .build();
    let won = TestClaimBuilder::for_adjuster(&adjuster)
        .closed_after_days(120, "Full Limits after DOI pressure")
        .build();
    let lost = TestClaimBuilder::for_adjuster(&adjuster)
        .closed_after_days(150, "Denied - flood exclusion")
        .build();
    let untouched = TestClaimBuilder::for_adjuster(&adjuster)
        .closed_after_days(30, "Settled within 10%")
        .build();
    let claims = vec![won.clone(), lost.clone(), untouched];

    let interactions = vec![
        TestInteractionBuilder::for_adjuster(&adjuster)
            .on_claim(&won)
            .describing("Filed DOI complaint")
            .build(),
        TestInteractionBuilder::for_adjuster(&adjuster)
            .on_claim(&lost)
            .describing("Bad faith demand letter")
            .build(),
    ];

    let engine = CarrierAggregationEngine::default();
    let intel = engine.aggregate("Lakeshore Mutual", &[], &claims, &interactions);

    // Of the two escalated claims, one ended resolved
    assert_close(intel.escalation_effectiveness.unwrap(), 50.0);
    // No reinspection interactions anywhere
    assert_eq!(intel.reinspection_win_rate, None);
}

#[test]
fn test_reinspection_win_rate() {
    let adjuster = TestAdjusterBuilder::new()
        .with_carrier("Lakeshore Mutual")
        .build();
    let claim = TestClaimBuilder::for_adjuster(&adjuster)
        .closed_after_days(75, "Paid after second look")
        .build();
    let claims = vec![claim.clone()];
    let interactions = vec![
        TestInteractionBuilder::for_adjuster(&adjuster)
            .on_claim(&claim)
            .describing("Adjuster agreed to re-inspect the roof")
            .build(),
    ];

    let engine = CarrierAggregationEngine::default();
    let intel = engine.aggregate("Lakeshore Mutual", &[], &claims, &interactions);
    assert_close(intel.reinspection_win_rate.unwrap(), 100.0);
}

#[test]
fn test_friction_level_from_mean_adjuster_risk() {
    let scoring = AdjusterScoringEngine::default();
    let aggregation = CarrierAggregationEngine::default();

    let calm = TestAdjusterBuilder::new().with_carrier("Two Rivers").build();
    let calm_claims: Vec<_> = (0..4)
        .map(|_| {
            TestClaimBuilder::for_adjuster(&calm)
                .closed_after_days(20, "Full Limits")
                .build()
        })
        .collect();
    let calm_summary = scoring.score(&calm, &calm_claims, &[]);

    let intel = aggregation.aggregate(
        "Two Rivers",
        std::slice::from_ref(&calm_summary),
        &calm_claims,
        &[],
    );
    assert_eq!(intel.friction_level, Some(FrictionLevel::Low));

    let hostile = TestAdjusterBuilder::new().with_carrier("Two Rivers").build();
    let hostile_claims: Vec<_> = (0..4)
        .map(|_| {
            TestClaimBuilder::for_adjuster(&hostile)
                .closed_after_days(300, "Denied")
                .build()
        })
        .collect();
    let hostile_interactions: Vec<_> = (0..3)
        .map(|_| {
            TestInteractionBuilder::for_adjuster(&hostile)
                .describing("DOI complaint escalation")
                .build()
        })
        .collect();
    let hostile_summary = scoring.score(&hostile, &hostile_claims, &hostile_interactions);

    let intel = aggregation.aggregate(
        "Two Rivers",
        std::slice::from_ref(&hostile_summary),
        &hostile_claims,
        &hostile_interactions,
    );
    assert_eq!(intel.friction_level, Some(FrictionLevel::High));
}

#[test]
fn test_resolution_tendency_bands() {
    let config = ScoringConfig::default();
    assert_eq!(
        ResolutionTendency::from_days(30.0, &config),
        ResolutionTendency::Fast
    );
    assert_eq!(
        ResolutionTendency::from_days(100.0, &config),
        ResolutionTendency::Normal
    );
    // Band edges are Normal
    assert_eq!(
        ResolutionTendency::from_days(60.0, &config),
        ResolutionTendency::Normal
    );
    assert_eq!(
        ResolutionTendency::from_days(150.0, &config),
        ResolutionTendency::Normal
    );
    assert_eq!(
        ResolutionTendency::from_days(200.0, &config),
        ResolutionTendency::Slow
    );
}

#[test]
fn test_carrier_means_are_claim_weighted_not_mean_of_means() {
    let aggregation = CarrierAggregationEngine::default();
    let scoring = AdjusterScoringEngine::default();

    // One adjuster with 9 fast claims, one with a single slow claim
    let big = TestAdjusterBuilder::new().with_carrier("Harbor Mutual").build();
    let mut claims: Vec<_> = (0..9)
        .map(|_| {
            TestClaimBuilder::for_adjuster(&big)
                .closed_after_days(10, "Full Limits")
                .build()
        })
        .collect();
    let small = TestAdjusterBuilder::new().with_carrier("Harbor Mutual").build();
    claims.push(
        TestClaimBuilder::for_adjuster(&small)
            .closed_after_days(110, "Full Limits")
            .build(),
    );

    let summaries = vec![
        scoring.score(&big, &claims[..9], &[]),
        scoring.score(&small, &claims[9..], &[]),
    ];

    let intel = aggregation.aggregate("Harbor Mutual", &summaries, &claims, &[]);

    // Claim-weighted mean: (9*10 + 110) / 10 = 20, not (10 + 110) / 2 = 60
    assert_close(intel.avg_days_to_resolution.unwrap(), 20.0);
    assert_eq!(intel.total_adjusters, 2);
}
