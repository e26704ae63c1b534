//! # Quorum Verification
//!
//! Committee members each hold a share and sign the same protocol message
//! through their own signer; anyone holding the aggregate checks it with the
//! quorum verifier.

#[cfg(test)]
mod tests {
    use crate::fixtures::{commit_message, memory_signer, secret_bytes, MemorySigner};
    use shared_crypto::BlsSignature;
    use shared_types::{NetworkConfig, SignatureType, ValidatorPubKey};
    use sp_02_key_manager::{protocol_signing_root, KeyManager};
    use sp_03_quorum_verifier::{
        QuorumError, QuorumRequest, QuorumVerification, QuorumVerifier, Signer, VerifierConfig,
    };

    struct Operator {
        index: u64,
        signer: MemorySigner,
        share: ValidatorPubKey,
    }

    fn committee(size: u8) -> Vec<Operator> {
        (1..=size)
            .map(|i| {
                let (signer, _) = memory_signer();
                let share = signer.add_share(&secret_bytes(100 + i)).unwrap();
                Operator {
                    index: i as u64,
                    signer,
                    share,
                }
            })
            .collect()
    }

    /// Aggregate signature of `members` over one commit message, and the root it covers.
    fn sign_by(members: &[&Operator]) -> (Vec<u8>, [u8; 32], Vec<Signer>) {
        let msg = commit_message(b"validator-duty-7", [0xCC; 32]);
        let partials: Vec<_> = members
            .iter()
            .map(|op| {
                let bytes = op.signer.sign_root(&msg, SignatureType::QBFT, &op.share).unwrap();
                BlsSignature::from_bytes(&bytes).unwrap()
            })
            .collect();
        let aggregate = BlsSignature::aggregate(&partials).unwrap();
        let root = protocol_signing_root(
            &msg,
            NetworkConfig::test_network().domain_type,
            SignatureType::QBFT,
        )
        .unwrap();
        let signers = members
            .iter()
            .map(|op| Signer::new(op.index, *op.share.as_bytes()))
            .collect();
        (aggregate.to_bytes().to_vec(), root, signers)
    }

    #[test]
    fn test_aggregate_bit_flip_and_no_poisoning() {
        let ops = committee(2);
        let (signature, root, signers) = sign_by(&[&ops[0], &ops[1]]);
        let verifier = QuorumVerifier::new(VerifierConfig::for_testing());

        assert!(verifier.verify_by_committee(&signature, &root, &signers).is_ok());

        let mut flipped = signature.clone();
        flipped[10] ^= 0x80;
        assert!(matches!(
            verifier.verify_by_committee(&flipped, &root, &signers),
            Err(QuorumError::InvalidQuorumSignature(_))
        ));

        assert!(verifier.verify_by_committee(&signature, &root, &signers).is_ok());

        let stats = verifier.stats();
        assert_eq!(
            (stats.attempts, stats.hits, stats.misses, stats.failures),
            (3, 1, 2, 1)
        );
    }

    #[test]
    fn test_threshold_subset_of_larger_committee() {
        let ops = committee(4);
        let (signature, root, signers) = sign_by(&[&ops[0], &ops[2], &ops[3]]);
        let verifier = QuorumVerifier::default();

        assert!(verifier.verify_by_committee(&signature, &root, &signers).is_ok());

        // Claiming a member who did not sign fails
        let mut claimed = signers.clone();
        claimed.push(Signer::new(ops[1].index, *ops[1].share.as_bytes()));
        assert!(verifier.verify_by_committee(&signature, &root, &claimed).is_err());

        // Omitting a member who did sign fails
        assert!(verifier
            .verify_by_committee(&signature, &root, &signers[..2])
            .is_err());
    }

    #[test]
    fn test_listing_order_shares_the_cache_entry() {
        let ops = committee(3);
        let (signature, root, mut signers) = sign_by(&[&ops[0], &ops[1], &ops[2]]);
        let verifier = QuorumVerifier::default();

        verifier.verify_by_committee(&signature, &root, &signers).unwrap();
        signers.reverse();
        verifier.verify_by_committee(&signature, &root, &signers).unwrap();

        assert_eq!(verifier.stats().hits, 1);
        assert_eq!(verifier.stats().cache_len, 1);
    }

    #[test]
    fn test_batch_over_many_duties() {
        let ops = committee(3);
        let (signature, root, signers) = sign_by(&[&ops[0], &ops[1], &ops[2]]);
        let verifier = QuorumVerifier::default();

        let mut requests: Vec<_> = (0..32)
            .map(|_| QuorumRequest {
                signature: signature.clone(),
                signing_root: root,
                signers: signers.clone(),
            })
            .collect();
        requests[7].signing_root = [0u8; 32];

        let results = verifier.verify_batch(&requests);
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
        assert!(results[7].is_err());

        let stats = verifier.stats();
        assert_eq!(stats.attempts, 32);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.hits + stats.misses, 32);
    }
}
