//! Driving Ports (API - Inbound)
//!
//! The operations the signing service calls. Every mutating operation runs
//! inside the identity's critical section and persists before returning `Ok`.

use crate::domain::errors::ProtectionResult;
use crate::domain::{AttestationVote, ProposalVote, SlashingRecord};
use shared_types::ValidatorPubKey;

pub trait SlashingProtectionApi: Send + Sync {
    /// Check the candidate against the highest attestation and, if safe,
    /// durably record it.
    fn authorize_attestation(
        &self,
        identity: &ValidatorPubKey,
        vote: AttestationVote,
    ) -> ProtectionResult<()>;

    /// Check the candidate against the highest proposal and, if safe,
    /// durably record it.
    fn authorize_proposal(
        &self,
        identity: &ValidatorPubKey,
        vote: ProposalVote,
    ) -> ProtectionResult<()>;

    /// Create an empty record if none exists. Returns whether one was created.
    fn initialize(&self, identity: &ValidatorPubKey) -> ProtectionResult<bool>;

    /// Raise the record to at least the given floors. Never lowers anything.
    fn bump_protection(
        &self,
        identity: &ValidatorPubKey,
        min_attestation: AttestationVote,
        min_proposal: ProposalVote,
    ) -> ProtectionResult<SlashingRecord>;

    fn highest_attestation(
        &self,
        identity: &ValidatorPubKey,
    ) -> ProtectionResult<Option<AttestationVote>>;

    fn highest_proposal(&self, identity: &ValidatorPubKey)
        -> ProtectionResult<Option<ProposalVote>>;

    /// Dry run of `authorize_attestation`; records nothing.
    fn is_attestation_slashable(
        &self,
        identity: &ValidatorPubKey,
        vote: &AttestationVote,
    ) -> ProtectionResult<bool>;

    /// Dry run of `authorize_proposal`; records nothing.
    fn is_proposal_slashable(
        &self,
        identity: &ValidatorPubKey,
        vote: &ProposalVote,
    ) -> ProtectionResult<bool>;

    /// Drop the record of an identity that is no longer served.
    fn remove(&self, identity: &ValidatorPubKey) -> ProtectionResult<()>;
}
