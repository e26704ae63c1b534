//! # Shared Types Crate
//!
//! Chain primitives consumed by every signer crate.
//!
//! ## Contents
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `primitives` | Epoch, slot, root, validator public key |
//! | `domain` | Network tags, beacon domains, signing-root computation |
//! | `beacon` | Duty types and the beacon objects they sign |
//! | `consensus` | Agreement-protocol messages signed via `SignRoot` |
//! | `ssz` | Tree-hash merkleization helpers |
//! | `network` | Network presets and the beacon clock |
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: signing roots are computed here and nowhere else,
//!   so the signer and any verifier agree byte-for-byte on what was signed.
//! - **Closed payload set**: `BeaconObject` is an enum; a duty can only sign the
//!   payload kinds it declares.

pub mod beacon;
pub mod consensus;
pub mod domain;
pub mod errors;
pub mod network;
pub mod primitives;
pub mod ssz;

pub use beacon::{
    AggregateAndProof, AttestationData, BeaconBlockHeader, BeaconObject, Checkpoint, DutyType,
    VoluntaryExit,
};
pub use consensus::{ConsensusMessage, MessageType, MAX_IDENTIFIER_LENGTH};
pub use domain::{
    compute_domain, compute_protocol_signing_root, compute_signature_domain,
    compute_signing_root, Domain, DomainType, SignatureDomain, SignatureType,
};
pub use errors::TypesError;
pub use network::{BeaconClock, NetworkConfig};
pub use primitives::{
    Epoch, OperatorId, Root, Slot, ValidatorPubKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
pub use ssz::TreeHash;
