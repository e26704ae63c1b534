//! # Signing Flows
//!
//! End-to-end `SignBeaconObject` / `SignRoot` through the public API, with
//! real network domains and independent signature checks.

#[cfg(test)]
mod tests {
    use crate::fixtures::{attestation, block, commit_message, memory_signer, secret_bytes};
    use shared_crypto::{BlsPublicKey, BlsSignature};
    use shared_types::{
        AggregateAndProof, AttestationData, BeaconObject, DutyType, NetworkConfig, Root,
        SignatureType, ValidatorPubKey, VoluntaryExit,
    };
    use sp_01_slashing_protection::{AttestationVote, ProposalVote, SlashingProtectionApi};
    use sp_02_key_manager::{protocol_signing_root, KeyManager, SignerError};

    fn assert_valid(identity: &ValidatorPubKey, root: &Root, signature: &[u8; 96]) {
        let pk = BlsPublicKey::from_bytes(identity.as_bytes()).unwrap();
        let sig = BlsSignature::from_bytes(signature).unwrap();
        assert!(pk.verify(root, &sig), "signature does not verify");
    }

    fn domain_for(duty: DutyType) -> shared_types::Domain {
        NetworkConfig::test_network().beacon_domain(duty.beacon_domain_type().unwrap())
    }

    #[test]
    fn test_attestation_flow_with_network_domain() {
        let (signer, _) = memory_signer();
        let id = signer.add_share(&secret_bytes(1)).unwrap();
        let domain = domain_for(DutyType::Attester);

        let (root, sig) = signer
            .sign_beacon_object(&attestation(10, 20), &domain, &id, DutyType::Attester)
            .unwrap();
        assert_valid(&id, &root, &sig);

        let err = signer
            .sign_beacon_object(&attestation(10, 20), &domain, &id, DutyType::Attester)
            .unwrap_err();
        assert!(err.is_slashing_violation());
        assert!(err
            .to_string()
            .starts_with("slashable attestation (HighestAttestationVote), not signing"));

        let (root, sig) = signer
            .sign_beacon_object(&attestation(10, 21), &domain, &id, DutyType::Attester)
            .unwrap();
        assert_valid(&id, &root, &sig);
        assert_eq!(
            signer.ledger().highest_attestation(&id).unwrap(),
            Some(AttestationVote::new(10, 21))
        );
    }

    #[test]
    fn test_surround_and_source_regression_are_refused() {
        let (signer, _) = memory_signer();
        let id = signer.add_share(&secret_bytes(2)).unwrap();
        let domain = domain_for(DutyType::Attester);
        signer
            .sign_beacon_object(&attestation(10, 20), &domain, &id, DutyType::Attester)
            .unwrap();

        for (source, target) in [(9, 25), (10, 19), (11, 20), (0, 1)] {
            let err = signer
                .sign_beacon_object(&attestation(source, target), &domain, &id, DutyType::Attester)
                .unwrap_err();
            assert!(
                matches!(err, SignerError::SlashableAttestation { .. }),
                "{}->{} was not refused",
                source,
                target
            );
        }
        assert_eq!(
            signer.ledger().highest_attestation(&id).unwrap(),
            Some(AttestationVote::new(10, 20))
        );
    }

    #[test]
    fn test_proposal_flow() {
        let (signer, _) = memory_signer();
        let id = signer.add_share(&secret_bytes(3)).unwrap();
        let domain = domain_for(DutyType::Proposer);

        signer
            .sign_beacon_object(&block(100), &domain, &id, DutyType::Proposer)
            .unwrap();
        let err = signer
            .sign_beacon_object(&block(100), &domain, &id, DutyType::Proposer)
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("slashable proposal (HighestProposalVote), not signing"));
        assert!(signer
            .sign_beacon_object(&block(99), &domain, &id, DutyType::Proposer)
            .is_err());
        signer
            .sign_beacon_object(&block(101), &domain, &id, DutyType::Proposer)
            .unwrap();
        assert_eq!(
            signer.ledger().highest_proposal(&id).unwrap(),
            Some(ProposalVote::new(101))
        );
    }

    #[test]
    fn test_every_non_slashable_duty_signs_repeatedly() {
        let (signer, store) = memory_signer();
        let id = signer.add_share(&secret_bytes(4)).unwrap();
        let writes = store.write_count();

        let requests = [
            (
                DutyType::Aggregator,
                BeaconObject::AggregateAndProof(AggregateAndProof {
                    aggregator_index: 7,
                    aggregate_data: AttestationData::default(),
                    selection_proof: [0x11; 96],
                }),
            ),
            (DutyType::SyncCommittee, BeaconObject::Root([0x22; 32])),
            (
                DutyType::VoluntaryExit,
                BeaconObject::VoluntaryExit(VoluntaryExit {
                    epoch: 9,
                    validator_index: 7,
                }),
            ),
            (DutyType::RandaoReveal, BeaconObject::Epoch(9)),
            (DutyType::SelectionProof, BeaconObject::Slot(300)),
        ];

        for (duty, object) in &requests {
            let domain = domain_for(*duty);
            let first = signer
                .sign_beacon_object(object, &domain, &id, *duty)
                .unwrap();
            let second = signer
                .sign_beacon_object(object, &domain, &id, *duty)
                .unwrap();
            assert_eq!(first, second, "{} is not deterministic", duty);
            assert_valid(&id, &first.0, &first.1);
        }
        assert_eq!(store.write_count(), writes);
        assert!(signer.ledger().record(&id).unwrap().is_empty());
    }

    #[test]
    fn test_sign_root_is_domain_separated_per_network() {
        let (signer, _) = memory_signer();
        let id = signer.add_share(&secret_bytes(5)).unwrap();
        let msg = commit_message(id.as_bytes(), [0x33; 32]);

        let sig = signer.sign_root(&msg, SignatureType::QBFT, &id).unwrap();
        let root = protocol_signing_root(
            &msg,
            NetworkConfig::test_network().domain_type,
            SignatureType::QBFT,
        )
        .unwrap();
        assert_valid(&id, &root, &sig);

        let mainnet_root =
            protocol_signing_root(&msg, NetworkConfig::mainnet().domain_type, SignatureType::QBFT)
                .unwrap();
        let pk = BlsPublicKey::from_bytes(id.as_bytes()).unwrap();
        assert!(!pk.verify(&mainnet_root, &BlsSignature::from_bytes(&sig).unwrap()));
    }

    #[test]
    fn test_protocol_signing_never_touches_the_ledger() {
        let (signer, store) = memory_signer();
        let id = signer.add_share(&secret_bytes(6)).unwrap();
        let writes = store.write_count();

        for _ in 0..3 {
            signer
                .sign_root(&commit_message(b"duty-1", [0x44; 32]), SignatureType::QBFT, &id)
                .unwrap();
        }
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_unknown_identity_is_refused_everywhere() {
        let (signer, _) = memory_signer();
        let stranger = ValidatorPubKey::new([0xEE; 48]);

        assert!(matches!(
            signer.sign_beacon_object(
                &attestation(1, 2),
                &domain_for(DutyType::Attester),
                &stranger,
                DutyType::Attester
            ),
            Err(SignerError::UnknownIdentity { .. })
        ));
        assert!(matches!(
            signer.sign_root(&commit_message(b"x", [0u8; 32]), SignatureType::QBFT, &stranger),
            Err(SignerError::UnknownIdentity { .. })
        ));
    }
}
