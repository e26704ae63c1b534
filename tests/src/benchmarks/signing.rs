//! # Signing Throughput
//!
//! - Non-slashable duty: signing root + BLS sign only
//! - Attestation: adds the ledger critical section and an in-memory write
//! - File-backed attestation: adds fsync + rename per vote

use crate::fixtures::{attestation, commit_message, memory_signer, secret_bytes};
use criterion::{black_box, Criterion};
use shared_types::{BeaconObject, Domain, DutyType, SignatureType};
use sp_02_key_manager::{KeyManager, KeyManagerConfig, SigningService};
use std::time::Duration;

pub fn bench_sign_non_slashable(c: &mut Criterion) {
    let mut group = c.benchmark_group("signer/non_slashable");
    let (signer, _) = memory_signer();
    let id = signer.add_share(&secret_bytes(1)).unwrap();

    group.bench_function("randao_reveal", |b| {
        b.iter(|| {
            black_box(
                signer
                    .sign_beacon_object(
                        &BeaconObject::Epoch(7),
                        &Domain::default(),
                        &id,
                        DutyType::RandaoReveal,
                    )
                    .unwrap(),
            )
        })
    });

    let msg = commit_message(b"bench", [0x10; 32]);
    group.bench_function("sign_root", |b| {
        b.iter(|| black_box(signer.sign_root(&msg, SignatureType::QBFT, &id).unwrap()))
    });

    group.finish();
}

pub fn bench_sign_attestation(c: &mut Criterion) {
    let mut group = c.benchmark_group("signer/attestation");
    group.measurement_time(Duration::from_secs(10));

    let (signer, _) = memory_signer();
    let id = signer.add_share(&secret_bytes(2)).unwrap();
    let mut target = 0u64;
    group.bench_function("memory_ledger", |b| {
        b.iter(|| {
            target += 1;
            black_box(
                signer
                    .sign_beacon_object(
                        &attestation(0, target),
                        &Domain::default(),
                        &id,
                        DutyType::Attester,
                    )
                    .unwrap(),
            )
        })
    });

    let dir = tempfile::tempdir().unwrap();
    let file_signer = SigningService::open(KeyManagerConfig {
        slashing_db_path: dir.path().to_path_buf(),
        ..KeyManagerConfig::for_testing()
    })
    .unwrap();
    let id = file_signer.add_share(&secret_bytes(3)).unwrap();
    let mut target = 0u64;
    group.bench_function("file_ledger", |b| {
        b.iter(|| {
            target += 1;
            black_box(
                file_signer
                    .sign_beacon_object(
                        &attestation(0, target),
                        &Domain::default(),
                        &id,
                        DutyType::Attester,
                    )
                    .unwrap(),
            )
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_sign_non_slashable(c);
    bench_sign_attestation(c);
}
