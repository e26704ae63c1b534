//! Cache key of a verification request.
//!
//! Covers the signing root, the full canonical signer set and the signature
//! bytes, so two requests share a fingerprint only if they are the same
//! request.

use super::signer::Signer;
use shared_crypto::Blake3Hasher;
use shared_types::Root;
use sp_telemetry::ShortHex;
use std::fmt;

const FINGERPRINT_TAG: &[u8] = b"quorum-fingerprint";

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// `signers` must already be canonical.
    pub fn compute(signing_root: &Root, signers: &[Signer], signature: &[u8]) -> Self {
        let mut hasher = Blake3Hasher::new();
        hasher
            .update(FINGERPRINT_TAG)
            .update(signing_root)
            .update(&(signers.len() as u64).to_le_bytes());
        for signer in signers {
            hasher
                .update(&signer.committee_index.to_le_bytes())
                .update(&signer.public_key);
        }
        hasher.update(signature);
        Self(hasher.finalize())
    }

    /// Shard selected from the leading bytes.
    pub fn shard(&self, shards: usize) -> usize {
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&self.0[..8]);
        (u64::from_le_bytes(prefix) % shards.max(1) as u64) as usize
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ShortHex(&self.0, 8), f)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self)
    }
}
