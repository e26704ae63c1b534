//! # Protection Entities
//!
//! The per-identity record is the only persistent state of the signer. It
//! holds the highest attestation and proposal ever authorized; both only
//! ever move forward.

use serde::{Deserialize, Serialize};
use shared_types::{AttestationData, Epoch, Slot, ValidatorPubKey};
use std::fmt;

/// FFG vote reduced to what the protection rule looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttestationVote {
    pub source_epoch: Epoch,
    pub target_epoch: Epoch,
}

impl AttestationVote {
    pub const fn new(source_epoch: Epoch, target_epoch: Epoch) -> Self {
        Self {
            source_epoch,
            target_epoch,
        }
    }

    /// Source must not be after target.
    pub fn is_well_formed(&self) -> bool {
        self.source_epoch <= self.target_epoch
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self {
            source_epoch: self.source_epoch.max(other.source_epoch),
            target_epoch: self.target_epoch.max(other.target_epoch),
        }
    }
}

impl From<&AttestationData> for AttestationVote {
    fn from(data: &AttestationData) -> Self {
        Self::new(data.source.epoch, data.target.epoch)
    }
}

impl fmt::Display for AttestationVote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source_epoch, self.target_epoch)
    }
}

/// Block proposal reduced to its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProposalVote {
    pub slot: Slot,
}

impl ProposalVote {
    pub const fn new(slot: Slot) -> Self {
        Self { slot }
    }
}

impl fmt::Display for ProposalVote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.slot)
    }
}

/// Highest votes ever authorized for one identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashingRecord {
    pub identity: ValidatorPubKey,
    pub highest_attestation: Option<AttestationVote>,
    pub highest_proposal: Option<ProposalVote>,
}

impl SlashingRecord {
    /// Record of a freshly registered identity with no history.
    pub fn empty(identity: ValidatorPubKey) -> Self {
        Self {
            identity,
            highest_attestation: None,
            highest_proposal: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.highest_attestation.is_none() && self.highest_proposal.is_none()
    }
}
