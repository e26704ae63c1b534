//! # Beacon Duties and Objects
//!
//! The payloads a validator signs for chain duties, with their tree-hash
//! roots. Only attester and proposer duties are slashing-sensitive.

use crate::domain::{
    DOMAIN_AGGREGATE_AND_PROOF, DOMAIN_BEACON_ATTESTER, DOMAIN_BEACON_PROPOSER, DOMAIN_RANDAO,
    DOMAIN_SELECTION_PROOF, DOMAIN_SYNC_COMMITTEE, DOMAIN_VOLUNTARY_EXIT,
};
use crate::errors::TypesError;
use crate::primitives::{Epoch, Root, Slot, SIGNATURE_LENGTH};
use crate::ssz::{byte_vector_root, merkleize, u64_chunk, TreeHash};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

/// Category of chain action being signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DutyType {
    Attester,
    Proposer,
    Aggregator,
    SyncCommittee,
    VoluntaryExit,
    RandaoReveal,
    SelectionProof,
    ConsensusProtocolMessage,
}

impl DutyType {
    /// Whether signing twice can be slashed.
    pub fn is_slashable(&self) -> bool {
        matches!(self, DutyType::Attester | DutyType::Proposer)
    }

    /// Beacon domain type used to build the signing domain for this duty.
    ///
    /// `None` for protocol messages, which use a signature domain instead.
    pub fn beacon_domain_type(&self) -> Option<[u8; 4]> {
        match self {
            DutyType::Attester => Some(DOMAIN_BEACON_ATTESTER),
            DutyType::Proposer => Some(DOMAIN_BEACON_PROPOSER),
            DutyType::Aggregator => Some(DOMAIN_AGGREGATE_AND_PROOF),
            DutyType::SyncCommittee => Some(DOMAIN_SYNC_COMMITTEE),
            DutyType::VoluntaryExit => Some(DOMAIN_VOLUNTARY_EXIT),
            DutyType::RandaoReveal => Some(DOMAIN_RANDAO),
            DutyType::SelectionProof => Some(DOMAIN_SELECTION_PROOF),
            DutyType::ConsensusProtocolMessage => None,
        }
    }

    /// Whether this duty may sign the given payload kind.
    pub fn accepts(&self, object: &BeaconObject) -> bool {
        matches!(
            (self, object),
            (DutyType::Attester, BeaconObject::Attestation(_))
                | (DutyType::Proposer, BeaconObject::Block(_))
                | (DutyType::Aggregator, BeaconObject::AggregateAndProof(_))
                | (DutyType::SyncCommittee, BeaconObject::Root(_))
                | (DutyType::VoluntaryExit, BeaconObject::VoluntaryExit(_))
                | (DutyType::RandaoReveal, BeaconObject::Epoch(_))
                | (DutyType::SelectionProof, BeaconObject::Slot(_))
                | (DutyType::ConsensusProtocolMessage, BeaconObject::Root(_))
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DutyType::Attester => "attester",
            DutyType::Proposer => "proposer",
            DutyType::Aggregator => "aggregator",
            DutyType::SyncCommittee => "sync_committee",
            DutyType::VoluntaryExit => "voluntary_exit",
            DutyType::RandaoReveal => "randao_reveal",
            DutyType::SelectionProof => "selection_proof",
            DutyType::ConsensusProtocolMessage => "consensus_protocol_message",
        }
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// FFG checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Root,
}

impl TreeHash for Checkpoint {
    fn tree_hash_root(&self) -> Root {
        merkleize(&[u64_chunk(self.epoch), self.root])
    }
}

/// Attestation vote data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AttestationData {
    pub slot: Slot,
    pub index: u64,
    pub beacon_block_root: Root,
    pub source: Checkpoint,
    pub target: Checkpoint,
}

impl AttestationData {
    /// Reject votes whose source is after their target.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.source.epoch > self.target.epoch {
            return Err(TypesError::SourceAfterTarget {
                source_epoch: self.source.epoch,
                target_epoch: self.target.epoch,
            });
        }
        Ok(())
    }
}

impl TreeHash for AttestationData {
    fn tree_hash_root(&self) -> Root {
        merkleize(&[
            u64_chunk(self.slot),
            u64_chunk(self.index),
            self.beacon_block_root,
            self.source.tree_hash_root(),
            self.target.tree_hash_root(),
        ])
    }
}

/// Block header. Its root equals the root of the full block it summarises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BeaconBlockHeader {
    pub slot: Slot,
    pub proposer_index: u64,
    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

impl TreeHash for BeaconBlockHeader {
    fn tree_hash_root(&self) -> Root {
        merkleize(&[
            u64_chunk(self.slot),
            u64_chunk(self.proposer_index),
            self.parent_root,
            self.state_root,
            self.body_root,
        ])
    }
}

/// Aggregator's commitment to an aggregate attestation.
#[serde_as]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregateAndProof {
    pub aggregator_index: u64,
    pub aggregate_data: AttestationData,
    #[serde_as(as = "Bytes")]
    pub selection_proof: [u8; SIGNATURE_LENGTH],
}

impl TreeHash for AggregateAndProof {
    fn tree_hash_root(&self) -> Root {
        merkleize(&[
            u64_chunk(self.aggregator_index),
            self.aggregate_data.tree_hash_root(),
            byte_vector_root(&self.selection_proof),
        ])
    }
}

/// Request to leave the validator set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VoluntaryExit {
    pub epoch: Epoch,
    pub validator_index: u64,
}

impl TreeHash for VoluntaryExit {
    fn tree_hash_root(&self) -> Root {
        merkleize(&[u64_chunk(self.epoch), u64_chunk(self.validator_index)])
    }
}

/// Any payload accepted by `SignBeaconObject`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeaconObject {
    Attestation(AttestationData),
    Block(BeaconBlockHeader),
    AggregateAndProof(AggregateAndProof),
    VoluntaryExit(VoluntaryExit),
    /// RANDAO reveal signs the epoch.
    Epoch(Epoch),
    /// Selection proofs sign the slot.
    Slot(Slot),
    /// Precomputed object root (sync committee block root, protocol roots).
    Root(Root),
}

impl BeaconObject {
    pub fn kind(&self) -> &'static str {
        match self {
            BeaconObject::Attestation(_) => "attestation",
            BeaconObject::Block(_) => "block",
            BeaconObject::AggregateAndProof(_) => "aggregate_and_proof",
            BeaconObject::VoluntaryExit(_) => "voluntary_exit",
            BeaconObject::Epoch(_) => "epoch",
            BeaconObject::Slot(_) => "slot",
            BeaconObject::Root(_) => "root",
        }
    }
}

impl TreeHash for BeaconObject {
    fn tree_hash_root(&self) -> Root {
        match self {
            BeaconObject::Attestation(data) => data.tree_hash_root(),
            BeaconObject::Block(header) => header.tree_hash_root(),
            BeaconObject::AggregateAndProof(agg) => agg.tree_hash_root(),
            BeaconObject::VoluntaryExit(exit) => exit.tree_hash_root(),
            BeaconObject::Epoch(epoch) => epoch.tree_hash_root(),
            BeaconObject::Slot(slot) => slot.tree_hash_root(),
            BeaconObject::Root(root) => *root,
        }
    }
}
