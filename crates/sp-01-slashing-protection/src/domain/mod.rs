//! Domain layer: votes, records and the decision rules.

pub mod entities;
pub mod errors;
pub mod rules;

pub use entities::{AttestationVote, ProposalVote, SlashingRecord};
pub use errors::ProtectionError;
