//! Claims Intelligence Scoring Engine
//!
//! Transforms raw, per-entity event logs (claims, interactions) into derived
//! analytics: per-adjuster `AdjusterIntelligence` and carrier-wide
//! `CarrierIntelligence`. Everything here is a pure, synchronous computation
//! over caller-supplied snapshots; intelligence objects are recomputed on
//! every query and never cached.
//!
//! # Pipeline
//!
//! ```text
//! records snapshot -> OutcomeClassifier -> AdjusterScoringEngine
//!                                             -> CarrierAggregationEngine
//! ```
//!
//! Absence of data is a first-class outcome: every ratio or mean with an
//! empty denominator is `None`, never `0`, `NaN`, or an error.

pub mod lexicon;
pub mod classifier;
pub mod config;
pub mod scoring;
pub mod carrier;
pub mod service;
pub mod error;

pub use lexicon::SignalLexicon;
pub use classifier::{ClaimOutcome, OutcomeClassifier};
pub use config::ScoringConfig;
pub use scoring::{
    AdjusterIntelligence, AdjusterScoringEngine, CooperationLevel, PatternTag,
};
pub use carrier::{
    CarrierAggregationEngine, CarrierIntelligence, FrictionLevel, ResolutionTendency,
};
pub use service::IntelligenceService;
pub use error::IntelligenceError;
