//! # Signing Domains
//!
//! Domain separation for everything the signer produces.
//!
//! Beacon duties sign `sha256(object_root || domain)` where `domain` is the
//! 32-byte beacon domain (domain type + fork data root prefix). Agreement
//! protocol messages sign the same shape, but with an 8-byte signature domain
//! built from the network tag and the signature type.

use crate::primitives::Root;
use crate::ssz::{bytes_chunk, hash_pair};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 4-byte network tag separating protocol signatures across networks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DomainType(pub [u8; 4]);

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// 32-byte beacon signing domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Domain(pub [u8; 32]);

/// 4-byte tag of an agreement-protocol signature kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SignatureType(pub [u8; 4]);

impl SignatureType {
    /// Consensus round messages (proposal, prepare, commit, round change).
    pub const QBFT: SignatureType = SignatureType([1, 0, 0, 0]);
    /// Partial signatures exchanged after a decision.
    pub const PARTIAL_SIGNATURE: SignatureType = SignatureType([2, 0, 0, 0]);
    /// Distributed key generation messages.
    pub const DKG: SignatureType = SignatureType([3, 0, 0, 0]);
}

/// Network tag followed by signature type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SignatureDomain(pub [u8; 8]);

// Beacon domain types (consensus-specs phase0/altair).
pub const DOMAIN_BEACON_PROPOSER: [u8; 4] = [0, 0, 0, 0];
pub const DOMAIN_BEACON_ATTESTER: [u8; 4] = [1, 0, 0, 0];
pub const DOMAIN_RANDAO: [u8; 4] = [2, 0, 0, 0];
pub const DOMAIN_VOLUNTARY_EXIT: [u8; 4] = [4, 0, 0, 0];
pub const DOMAIN_SELECTION_PROOF: [u8; 4] = [5, 0, 0, 0];
pub const DOMAIN_AGGREGATE_AND_PROOF: [u8; 4] = [6, 0, 0, 0];
pub const DOMAIN_SYNC_COMMITTEE: [u8; 4] = [7, 0, 0, 0];

/// Root of `ForkData { current_version, genesis_validators_root }`.
pub fn compute_fork_data_root(fork_version: [u8; 4], genesis_validators_root: &Root) -> Root {
    hash_pair(&bytes_chunk(&fork_version), genesis_validators_root)
}

/// Beacon domain for a duty on a given fork.
pub fn compute_domain(
    domain_type: [u8; 4],
    fork_version: [u8; 4],
    genesis_validators_root: &Root,
) -> Domain {
    let fork_data_root = compute_fork_data_root(fork_version, genesis_validators_root);
    let mut domain = [0u8; 32];
    domain[..4].copy_from_slice(&domain_type);
    domain[4..].copy_from_slice(&fork_data_root[..28]);
    Domain(domain)
}

/// Protocol signature domain: network tag ‖ signature type.
pub fn compute_signature_domain(
    domain_type: DomainType,
    signature_type: SignatureType,
) -> SignatureDomain {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&domain_type.0);
    out[4..].copy_from_slice(&signature_type.0);
    SignatureDomain(out)
}

/// Root of `SigningData { object_root, domain }` for beacon duties.
pub fn compute_signing_root(object_root: &Root, domain: &Domain) -> Root {
    hash_pair(object_root, &domain.0)
}

/// Root of `SigningData { object_root, domain }` for protocol messages.
pub fn compute_protocol_signing_root(object_root: &Root, domain: &SignatureDomain) -> Root {
    hash_pair(object_root, &bytes_chunk(&domain.0))
}
