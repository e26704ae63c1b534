//! # Protection Rules
//!
//! Pure decision functions over the highest recorded vote.
//!
//! ## Attestations
//!
//! With highest recorded vote `H`, a candidate is safe only when
//! `candidate.target > H.target` and `candidate.source >= H.source`.
//! Equal targets are refused, identical repeats included.
//!
//! ## Proposals
//!
//! A candidate is safe only when `candidate.slot > H.slot`.
//!
//! An absent `H` accepts anything well formed.

use super::entities::{AttestationVote, ProposalVote};

pub fn attestation_is_safe(highest: Option<&AttestationVote>, candidate: &AttestationVote) -> bool {
    match highest {
        None => true,
        Some(h) => {
            candidate.target_epoch > h.target_epoch && candidate.source_epoch >= h.source_epoch
        }
    }
}

pub fn proposal_is_safe(highest: Option<&ProposalVote>, candidate: &ProposalVote) -> bool {
    match highest {
        None => true,
        Some(h) => candidate.slot > h.slot,
    }
}

/// Raise an optional highest vote to at least `floor`.
pub fn raise_attestation(
    highest: Option<AttestationVote>,
    floor: &AttestationVote,
) -> AttestationVote {
    match highest {
        None => *floor,
        Some(h) => h.max(floor),
    }
}

/// Raise an optional highest proposal to at least `floor`.
pub fn raise_proposal(highest: Option<ProposalVote>, floor: &ProposalVote) -> ProposalVote {
    match highest {
        None => *floor,
        Some(h) => h.max(*floor),
    }
}
