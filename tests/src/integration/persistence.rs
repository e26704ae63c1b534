//! # Persistence
//!
//! Protection history must outlive the process: records survive a reopen,
//! two handles cannot share a directory, and failed writes never release a
//! signature.

#[cfg(test)]
mod tests {
    use crate::fixtures::{attestation, block, memory_signer, secret_bytes};
    use shared_types::{Domain, DutyType};
    use sp_01_slashing_protection::{
        AttestationVote, FileSlashingStore, ProposalVote, SlashingProtectionApi, SlashingStore,
        StoreError,
    };
    use sp_02_key_manager::{FixedTimeSource, KeyManager, KeyManagerConfig, SignerError, SigningService};

    fn config_at(dir: &std::path::Path) -> KeyManagerConfig {
        KeyManagerConfig {
            slashing_db_path: dir.to_path_buf(),
            ..KeyManagerConfig::for_testing()
        }
    }

    #[test]
    fn test_history_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let id = {
            let signer = SigningService::open(config_at(dir.path())).unwrap();
            let id = signer.add_share(&secret_bytes(20)).unwrap();
            signer
                .sign_beacon_object(&attestation(10, 20), &Domain::default(), &id, DutyType::Attester)
                .unwrap();
            signer
                .sign_beacon_object(&block(100), &Domain::default(), &id, DutyType::Proposer)
                .unwrap();
            id
        };

        let signer = SigningService::open(config_at(dir.path())).unwrap();
        // Re-registration after restart must not reset history
        assert_eq!(signer.add_share(&secret_bytes(20)).unwrap(), id);
        assert_eq!(
            signer.ledger().highest_attestation(&id).unwrap(),
            Some(AttestationVote::new(10, 20))
        );

        assert!(signer
            .sign_beacon_object(&attestation(10, 20), &Domain::default(), &id, DutyType::Attester)
            .unwrap_err()
            .is_slashing_violation());
        assert!(signer
            .sign_beacon_object(&block(100), &Domain::default(), &id, DutyType::Proposer)
            .unwrap_err()
            .is_slashing_violation());
        assert!(signer
            .sign_beacon_object(&attestation(10, 21), &Domain::default(), &id, DutyType::Attester)
            .is_ok());
    }

    #[test]
    fn test_directory_is_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        let _first = FileSlashingStore::open(dir.path()).unwrap();

        assert!(matches!(
            FileSlashingStore::open(dir.path()),
            Err(StoreError::Locked { .. })
        ));
        assert!(matches!(
            SigningService::open(config_at(dir.path())),
            Err(SignerError::PersistenceFailure(_))
        ));
    }

    #[test]
    fn test_lock_released_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        drop(FileSlashingStore::open(dir.path()).unwrap());
        assert!(FileSlashingStore::open(dir.path()).is_ok());
    }

    #[test]
    fn test_bumped_floors_persist() {
        let dir = tempfile::tempdir().unwrap();
        let config = KeyManagerConfig {
            min_attestation_protection_epochs: 1,
            min_block_protection_slots: 4,
            ..config_at(dir.path())
        };
        // Slot 640 is epoch 20 on the test network
        let now = 640 * 12;

        let id = {
            let signer = SigningService::open(config.clone())
                .unwrap()
                .with_time_source(Box::new(FixedTimeSource(now)));
            let id = signer.add_share(&secret_bytes(21)).unwrap();
            signer.bump_slashing_protection(&id).unwrap();
            id
        };

        let store = FileSlashingStore::open(dir.path()).unwrap();
        let record = store.load(&id).unwrap().unwrap();
        assert_eq!(record.highest_attestation, Some(AttestationVote::new(20, 21)));
        assert_eq!(record.highest_proposal, Some(ProposalVote::new(644)));
    }

    #[test]
    fn test_failed_write_releases_nothing() {
        let (signer, store) = memory_signer();
        let id = signer.add_share(&secret_bytes(22)).unwrap();
        signer
            .sign_beacon_object(&block(5), &Domain::default(), &id, DutyType::Proposer)
            .unwrap();
        store.set_fail_writes(true);

        let err = signer
            .sign_beacon_object(&block(6), &Domain::default(), &id, DutyType::Proposer)
            .unwrap_err();
        assert!(matches!(err, SignerError::PersistenceFailure(_)));
        assert!(err.is_retryable());
        assert_eq!(
            signer.ledger().highest_proposal(&id).unwrap(),
            Some(ProposalVote::new(5))
        );

        store.set_fail_writes(false);
        assert!(signer
            .sign_beacon_object(&block(6), &Domain::default(), &id, DutyType::Proposer)
            .is_ok());
    }

    #[test]
    fn test_remove_share_deletes_record_file() {
        let dir = tempfile::tempdir().unwrap();
        let signer = SigningService::open(config_at(dir.path())).unwrap();
        let id = signer.add_share(&secret_bytes(23)).unwrap();
        assert_eq!(signer.ledger().identities().unwrap(), vec![id]);

        signer.remove_share(&id).unwrap();
        assert!(signer.ledger().identities().unwrap().is_empty());
        assert!(signer.list_identities().is_empty());
    }
}
