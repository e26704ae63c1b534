//! # Concurrency
//!
//! Same-identity requests are serialized by the ledger; different
//! identities proceed independently.

#[cfg(test)]
mod tests {
    use crate::fixtures::{attestation, block, memory_signer, secret_bytes};
    use shared_types::{Domain, DutyType};
    use sp_01_slashing_protection::{AttestationVote, SlashingProtectionApi};
    use sp_02_key_manager::KeyManager;
    use std::sync::{Arc, Barrier};
    use std::thread;

    const THREADS: usize = 16;

    #[test]
    fn test_identical_attestations_race_one_winner() {
        let (signer, _) = memory_signer();
        let signer = Arc::new(signer);
        let id = signer.add_share(&secret_bytes(30)).unwrap();
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let signer = signer.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    signer.sign_beacon_object(
                        &attestation(10, 20),
                        &Domain::default(),
                        &id,
                        DutyType::Attester,
                    )
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| e.is_slashing_violation()));
    }

    #[test]
    fn test_racing_targets_never_double_sign() {
        let (signer, _) = memory_signer();
        let signer = Arc::new(signer);
        let id = signer.add_share(&secret_bytes(31)).unwrap();
        let barrier = Arc::new(Barrier::new(THREADS));

        // Every thread tries every target; each target may be signed once
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let signer = signer.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    (1..=50u64)
                        .filter(|target| {
                            signer
                                .sign_beacon_object(
                                    &attestation(0, *target),
                                    &Domain::default(),
                                    &id,
                                    DutyType::Attester,
                                )
                                .is_ok()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut signed: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = signed.len();
        signed.sort_unstable();
        signed.dedup();
        assert_eq!(signed.len(), total, "a target was signed twice");
        assert_eq!(
            signer.ledger().highest_attestation(&id).unwrap(),
            Some(AttestationVote::new(0, 50))
        );
    }

    #[test]
    fn test_identities_are_independent() {
        let (signer, _) = memory_signer();
        let signer = Arc::new(signer);
        let ids: Vec<_> = (0..THREADS as u8)
            .map(|seed| signer.add_share(&secret_bytes(40 + seed)).unwrap())
            .collect();

        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let signer = signer.clone();
                let id = *id;
                thread::spawn(move || {
                    for slot in 1..=20 {
                        signer
                            .sign_beacon_object(&block(slot), &Domain::default(), &id, DutyType::Proposer)
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        for id in &ids {
            assert_eq!(
                signer.ledger().highest_proposal(id).unwrap().map(|p| p.slot),
                Some(20)
            );
        }
    }

    #[test]
    fn test_concurrent_registration_of_one_key() {
        let (signer, store) = memory_signer();
        let signer = Arc::new(signer);
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let signer = signer.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    signer.add_share(&secret_bytes(60))
                })
            })
            .collect();

        let ids: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(store.len(), 1);
        assert_eq!(signer.list_identities().len(), 1);
    }
}
