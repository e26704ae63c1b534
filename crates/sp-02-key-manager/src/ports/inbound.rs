//! Driving ports (Inbound API)

use crate::domain::{SignerResult, ValidatorShare};
use shared_types::{
    BeaconObject, ConsensusMessage, Domain, DutyType, Root, SignatureType, ValidatorPubKey,
    SIGNATURE_LENGTH,
};
use std::sync::Arc;

/// Primary signer API.
///
/// All methods are safe to call concurrently. Calls for different identities
/// never block each other.
pub trait KeyManager: Send + Sync {
    /// Register a 32-byte secret scalar and return its identity.
    ///
    /// Re-adding the same key succeeds without touching its protection
    /// record.
    fn add_share(&self, secret_key: &[u8]) -> SignerResult<ValidatorPubKey>;

    /// Fetch a registered share.
    fn lookup(&self, identity: &ValidatorPubKey) -> SignerResult<Arc<ValidatorShare>>;

    /// Sign a beacon duty payload, returning the signing root and signature.
    ///
    /// # Security
    /// - Attester and proposer duties are authorized and durably recorded by
    ///   the slashing ledger before the key is touched
    /// - A refusal never produces a signature
    fn sign_beacon_object(
        &self,
        object: &BeaconObject,
        domain: &Domain,
        identity: &ValidatorPubKey,
        duty: DutyType,
    ) -> SignerResult<(Root, [u8; SIGNATURE_LENGTH])>;

    /// Sign an agreement-protocol message. No slashing check applies.
    fn sign_root(
        &self,
        message: &ConsensusMessage,
        signature_type: SignatureType,
        identity: &ValidatorPubKey,
    ) -> SignerResult<[u8; SIGNATURE_LENGTH]>;

    /// Drop a share and its protection record.
    fn remove_share(&self, identity: &ValidatorPubKey) -> SignerResult<()>;

    /// Registered identities in key order.
    fn list_identities(&self) -> Vec<ValidatorPubKey>;
}
