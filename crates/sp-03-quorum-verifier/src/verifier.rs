//! # Quorum Verifier
//!
//! ```text
//! request ──► canonicalize signers ──► fingerprint ──► cache ──hit──► outcome
//!                                                        │
//!                                                       miss
//!                                                        ▼
//!                                   parse + fast aggregate verify (no lock held)
//!                                                        │
//!                                                        ▼
//!                                            cache insert (first writer wins)
//! ```
//!
//! Stats are plain atomics and always on; the `metrics` feature mirrors them
//! into Prometheus.

use crate::config::VerifierConfig;
use crate::domain::{canonicalize, Fingerprint, QuorumFailure, QuorumResult, Signer, VerificationCache};
use crate::metrics;
use crate::ports::QuorumVerification;
use rayon::prelude::*;
use shared_crypto::{BlsPublicKey, BlsSignature};
use shared_types::Root;
use sp_telemetry::log_verification_event;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// One entry of a batch verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuorumRequest {
    pub signature: Vec<u8>,
    pub signing_root: Root,
    pub signers: Vec<Signer>,
}

/// Snapshot of the verifier counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifierStats {
    pub attempts: u64,
    pub hits: u64,
    pub misses: u64,
    /// Calls that returned an error, whether computed or cached
    pub failures: u64,
    pub cache_len: usize,
}

#[derive(Default)]
struct Counters {
    attempts: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    failures: AtomicU64,
}

pub struct QuorumVerifier {
    cache: VerificationCache,
    counters: Counters,
}

impl QuorumVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            cache: VerificationCache::new(
                config.cache_capacity,
                config.cache_shards,
                config.cache_ttl,
            ),
            counters: Counters::default(),
        }
    }

    pub fn cache(&self) -> &VerificationCache {
        &self.cache
    }
}

impl Default for QuorumVerifier {
    fn default() -> Self {
        Self::new(VerifierConfig::default())
    }
}

/// Uncached check of an aggregate over canonical signers.
fn verify_aggregate(signature: &[u8], signing_root: &Root, signers: &[Signer]) -> QuorumResult<()> {
    if signers.is_empty() {
        return Err(QuorumFailure::EmptySignerSet.into());
    }
    let aggregate =
        BlsSignature::from_bytes(signature).map_err(|_| QuorumFailure::MalformedSignature)?;
    let keys = signers
        .iter()
        .map(|signer| {
            BlsPublicKey::from_bytes(&signer.public_key).map_err(|_| {
                QuorumFailure::MalformedPublicKey {
                    committee_index: signer.committee_index,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if aggregate.fast_aggregate_verify(signing_root, &keys) {
        Ok(())
    } else {
        Err(QuorumFailure::PairingFailed.into())
    }
}

impl QuorumVerification for QuorumVerifier {
    fn verify_by_committee(
        &self,
        signature: &[u8],
        signing_root: &Root,
        signers: &[Signer],
    ) -> QuorumResult<()> {
        self.counters.attempts.fetch_add(1, Ordering::Relaxed);

        let canonical = canonicalize(signers);
        let fingerprint = Fingerprint::compute(signing_root, &canonical, signature);

        let outcome = match self.cache.get(&fingerprint) {
            Some(cached) => {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                metrics::record_hit();
                log_verification_event!(trace, "Verification cache hit", fingerprint);
                cached
            }
            None => {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                metrics::record_miss();

                let started = Instant::now();
                let fresh = verify_aggregate(signature, signing_root, &canonical);
                metrics::record_pairing_latency(started.elapsed().as_secs_f64());

                if let Err(e) = &fresh {
                    log_verification_event!(
                        debug,
                        "Quorum signature rejected",
                        fingerprint,
                        signers = canonical.len(),
                        reason = %e
                    );
                }
                self.cache.insert(fingerprint, fresh)
            }
        };

        if outcome.is_err() {
            self.counters.failures.fetch_add(1, Ordering::Relaxed);
            metrics::record_failure();
        }
        outcome
    }

    fn verify_batch(&self, requests: &[QuorumRequest]) -> Vec<QuorumResult<()>> {
        requests
            .par_iter()
            .map(|req| self.verify_by_committee(&req.signature, &req.signing_root, &req.signers))
            .collect()
    }

    fn stats(&self) -> VerifierStats {
        VerifierStats {
            attempts: self.counters.attempts.load(Ordering::Relaxed),
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
            cache_len: self.cache.len(),
        }
    }

    fn clear_cache(&self) {
        self.cache.clear();
    }
}
