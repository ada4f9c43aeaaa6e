//! Raw Record Domain
//!
//! The read-only entity model the intelligence engine consumes: adjusters,
//! the claims tracked against them, and the logged interactions. Records are
//! created and mutated by an external CRUD layer; this crate owns their
//! invariants and the query port through which snapshots are fetched.

pub mod adjuster;
pub mod claim;
pub mod interaction;
pub mod ports;
pub mod error;

pub use adjuster::Adjuster;
pub use claim::{Claim, ClaimStatus};
pub use interaction::{Interaction, InteractionType};
pub use ports::RecordsPort;
pub use error::RecordError;
