//! Adjuster records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::AdjusterId;

/// An insurance adjuster being tracked
///
/// An adjuster belongs to exactly one carrier at a time; the carrier is a
/// denormalized name, not an entity with its own lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjuster {
    /// Unique identifier
    pub id: AdjusterId,
    /// Full name
    pub name: String,
    /// Carrier name
    pub carrier: String,
    /// Operating region
    pub region: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Internal notes, never shown outside the team
    pub internal_notes: Option<String>,
    /// Free-text impression of how adversarial this adjuster tends to be
    pub risk_impression: Option<String>,
    /// Free-text notes on tactics that moved claims with this adjuster
    pub what_worked: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Adjuster {
    /// Creates a new adjuster record
    pub fn new(name: impl Into<String>, carrier: impl Into<String>) -> Self {
        Self {
            id: AdjusterId::new(),
            name: name.into(),
            carrier: carrier.into(),
            region: None,
            phone: None,
            email: None,
            internal_notes: None,
            risk_impression: None,
            what_worked: None,
            created_at: Utc::now(),
        }
    }
}
