//! Session state and access tier resolution

use serde::{Deserialize, Serialize};

/// Capability level within the team tier
///
/// Governs write permissions elsewhere in the system; it never affects
/// masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Viewer,
    Editor,
    Admin,
}

/// Kind of account behind an authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Team,
    Individual,
    /// Time-limited trial account; treated as an individual for access
    Trial,
}

/// Caller's trust classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    /// Full team member; sees raw field values
    Team(Capability),
    /// Individual subscriber; sees masked field values
    Individual,
    /// No session; sees masked field values
    Unauthenticated,
}

impl AccessTier {
    /// Returns true if this tier receives raw, unmasked field values
    pub fn sees_raw_fields(&self) -> bool {
        matches!(self, AccessTier::Team(_))
    }
}

/// Snapshot of a caller's session as reported by the identity layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub user_type: Option<UserType>,
    pub access_level: Option<Capability>,
}

impl Session {
    /// An unauthenticated session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A team session with the given capability level
    pub fn team(capability: Capability) -> Self {
        Self {
            authenticated: true,
            user_type: Some(UserType::Team),
            access_level: Some(capability),
        }
    }

    /// An individual subscriber session
    pub fn individual() -> Self {
        Self {
            authenticated: true,
            user_type: Some(UserType::Individual),
            access_level: None,
        }
    }
}

/// Resolves a session to its access tier
///
/// Team members missing an explicit capability level fall back to viewer,
/// the least privileged level. Trial accounts resolve to the individual
/// tier. An authenticated session with no recorded user type is treated as
/// unauthenticated rather than granted anything.
pub fn resolve_tier(session: &Session) -> AccessTier {
    if !session.authenticated {
        return AccessTier::Unauthenticated;
    }
    match session.user_type {
        Some(UserType::Team) => {
            AccessTier::Team(session.access_level.unwrap_or(Capability::Viewer))
        }
        Some(UserType::Individual) | Some(UserType::Trial) => AccessTier::Individual,
        None => AccessTier::Unauthenticated,
    }
}
