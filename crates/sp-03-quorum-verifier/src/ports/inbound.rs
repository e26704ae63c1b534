//! Driving ports (Inbound API)

use crate::domain::{QuorumResult, Signer};
use crate::verifier::{QuorumRequest, VerifierStats};
use shared_types::Root;

/// Committee signature verification API.
pub trait QuorumVerification: Send + Sync {
    /// Check that `signature` is the aggregate of every signer's share
    /// signature over `signing_root`.
    ///
    /// Signer order and duplicate entries do not affect the outcome. Repeated
    /// identical requests are answered from the cache.
    fn verify_by_committee(
        &self,
        signature: &[u8],
        signing_root: &Root,
        signers: &[Signer],
    ) -> QuorumResult<()>;

    /// Verify many requests in parallel. Results keep the request order.
    fn verify_batch(&self, requests: &[QuorumRequest]) -> Vec<QuorumResult<()>>;

    /// Counter snapshot.
    fn stats(&self) -> VerifierStats;

    /// Drop every cached outcome. Counters are kept.
    fn clear_cache(&self);
}
