//! Deterministic test inputs.

use shared_crypto::BlsSecretKey;
use shared_types::{
    AttestationData, BeaconBlockHeader, BeaconObject, Checkpoint, ConsensusMessage, MessageType,
    Root,
};
use sp_01_slashing_protection::InMemorySlashingStore;
use sp_02_key_manager::{KeyManagerConfig, SigningService};
use std::sync::Arc;

pub type MemorySigner = SigningService<Arc<InMemorySlashingStore>>;

/// Valid secret scalar derived from a seed. Seeds 1..=255 give distinct keys.
pub fn secret_bytes(seed: u8) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[30] = 0x01;
    bytes[31] = seed;
    bytes
}

pub fn secret_key(seed: u8) -> BlsSecretKey {
    BlsSecretKey::from_bytes(&secret_bytes(seed)).expect("seeded scalar is below the group order")
}

pub fn attestation(source: u64, target: u64) -> BeaconObject {
    BeaconObject::Attestation(AttestationData {
        slot: target * 32,
        index: 3,
        beacon_block_root: [0xB1; 32],
        source: Checkpoint {
            epoch: source,
            root: [0x50; 32],
        },
        target: Checkpoint {
            epoch: target,
            root: [0x7A; 32],
        },
    })
}

pub fn block(slot: u64) -> BeaconObject {
    BeaconObject::Block(BeaconBlockHeader {
        slot,
        proposer_index: 11,
        parent_root: [0x01; 32],
        state_root: [0x02; 32],
        body_root: [0x03; 32],
    })
}

pub fn commit_message(identifier: &[u8], root: Root) -> ConsensusMessage {
    ConsensusMessage {
        msg_type: MessageType::Commit,
        height: 42,
        round: 1,
        identifier: identifier.to_vec(),
        root,
    }
}

/// Signer over an in-memory ledger, plus a handle on the store.
pub fn memory_signer() -> (MemorySigner, Arc<InMemorySlashingStore>) {
    let store = Arc::new(InMemorySlashingStore::new());
    (
        SigningService::new(KeyManagerConfig::for_testing(), store.clone()),
        store,
    )
}
