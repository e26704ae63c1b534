//! # Quorum Verification
//!
//! Cached vs uncached aggregate checks, and batch throughput.

use crate::fixtures::secret_key;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use shared_crypto::BlsSignature;
use sp_03_quorum_verifier::{
    QuorumRequest, QuorumVerification, QuorumVerifier, Signer, VerifierConfig,
};

const ROOT: [u8; 32] = [0x9C; 32];

fn committee_request(size: u8) -> QuorumRequest {
    let keys: Vec<_> = (1..=size).map(secret_key).collect();
    let partials: Vec<_> = keys.iter().map(|k| k.sign(&ROOT)).collect();
    QuorumRequest {
        signature: BlsSignature::aggregate(&partials)
            .unwrap()
            .to_bytes()
            .to_vec(),
        signing_root: ROOT,
        signers: keys
            .iter()
            .enumerate()
            .map(|(i, k)| Signer::new(i as u64 + 1, k.public_key().to_bytes()))
            .collect(),
    }
}

pub fn bench_cached_vs_uncached(c: &mut Criterion) {
    let mut group = c.benchmark_group("quorum/verify");

    for size in [4u8, 7, 13] {
        let req = committee_request(size);

        group.bench_with_input(BenchmarkId::new("uncached", size), &req, |b, req| {
            let verifier = QuorumVerifier::new(VerifierConfig::default());
            b.iter(|| {
                verifier.clear_cache();
                black_box(verifier.verify_by_committee(&req.signature, &req.signing_root, &req.signers))
            })
        });

        group.bench_with_input(BenchmarkId::new("cached", size), &req, |b, req| {
            let verifier = QuorumVerifier::new(VerifierConfig::default());
            let _ = verifier.verify_by_committee(&req.signature, &req.signing_root, &req.signers);
            b.iter(|| {
                black_box(verifier.verify_by_committee(&req.signature, &req.signing_root, &req.signers))
            })
        });
    }

    group.finish();
}

pub fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("quorum/batch");
    let req = committee_request(4);

    for size in [16usize, 64] {
        // Distinct roots so every entry misses
        let requests: Vec<_> = (0..size)
            .map(|i| {
                let mut r = req.clone();
                r.signing_root[0] = i as u8;
                r
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("uncached", size), &requests, |b, requests| {
            let verifier = QuorumVerifier::new(VerifierConfig::default());
            b.iter(|| {
                verifier.clear_cache();
                black_box(verifier.verify_batch(requests))
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_cached_vs_uncached(c);
    bench_batch(c);
}
