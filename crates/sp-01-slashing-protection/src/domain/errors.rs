//! # Protection Errors
//!
//! Slashing refusals carry the historical vote they conflict with so callers
//! can tell exactly which record blocked the request.

use super::entities::{AttestationVote, ProposalVote};
use crate::ports::outbound::StoreError;
use shared_types::ValidatorPubKey;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtectionError {
    /// No protection record exists for this identity
    #[error("unknown identity {identity}")]
    UnknownIdentity { identity: ValidatorPubKey },

    /// Candidate does not strictly improve on the highest attestation
    #[error(
        "slashable attestation (HighestAttestationVote), not signing: candidate {candidate}, highest {highest}"
    )]
    SlashableAttestation {
        identity: ValidatorPubKey,
        candidate: AttestationVote,
        highest: AttestationVote,
    },

    /// Candidate slot is not above the highest proposal
    #[error(
        "slashable proposal (HighestProposalVote), not signing: candidate {candidate}, highest {highest}"
    )]
    SlashableProposal {
        identity: ValidatorPubKey,
        candidate: ProposalVote,
        highest: ProposalVote,
    },

    /// Source epoch after target epoch
    #[error("malformed attestation vote {vote}: source after target")]
    MalformedVote { vote: AttestationVote },

    /// The record could not be read or durably written
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl ProtectionError {
    /// Refusal because signing would be slashable. Never retry with the same vote.
    pub fn is_slashing_violation(&self) -> bool {
        matches!(
            self,
            ProtectionError::SlashableAttestation { .. } | ProtectionError::SlashableProposal { .. }
        )
    }
}

pub type ProtectionResult<T> = Result<T, ProtectionError>;
