//! # Properties
//!
//! Randomized checks of the ledger rules and verifier cache keys.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shared_types::ValidatorPubKey;
    use sp_01_slashing_protection::{
        AttestationVote, InMemorySlashingStore, ProposalVote, SlashingProtectionApi,
        SlashingProtectionLedger,
    };
    use sp_03_quorum_verifier::{canonicalize, Fingerprint, Signer};

    fn ledger() -> (SlashingProtectionLedger<InMemorySlashingStore>, ValidatorPubKey) {
        let id = ValidatorPubKey::new([0x77; 48]);
        let ledger = SlashingProtectionLedger::new(InMemorySlashingStore::new());
        ledger.initialize(&id).unwrap();
        (ledger, id)
    }

    fn vote() -> impl Strategy<Value = AttestationVote> {
        (0u64..64, 0u64..64).prop_map(|(a, b)| AttestationVote::new(a.min(b), a.max(b)))
    }

    proptest! {
        #[test]
        fn prop_accepted_attestations_are_monotonic(votes in prop::collection::vec(vote(), 1..40)) {
            let (ledger, id) = ledger();
            let mut last: Option<AttestationVote> = None;

            for vote in votes {
                let accepted = ledger.authorize_attestation(&id, vote).is_ok();
                let expected = last.map_or(true, |h| {
                    vote.target_epoch > h.target_epoch && vote.source_epoch >= h.source_epoch
                });
                prop_assert_eq!(accepted, expected);
                if accepted {
                    last = Some(vote);
                }
                prop_assert_eq!(ledger.highest_attestation(&id).unwrap(), last);
            }
        }

        #[test]
        fn prop_accepted_proposals_strictly_increase(slots in prop::collection::vec(0u64..200, 1..40)) {
            let (ledger, id) = ledger();
            let mut highest: Option<u64> = None;

            for slot in slots {
                let accepted = ledger.authorize_proposal(&id, ProposalVote::new(slot)).is_ok();
                prop_assert_eq!(accepted, highest.map_or(true, |h| slot > h));
                if accepted {
                    highest = Some(slot);
                }
            }
        }

        #[test]
        fn prop_dry_run_matches_authorization(first in vote(), second in vote()) {
            let (ledger, id) = ledger();
            ledger.authorize_attestation(&id, first).unwrap();

            let predicted = ledger.is_attestation_slashable(&id, &second).unwrap();
            let refused = ledger.authorize_attestation(&id, second).is_err();
            prop_assert_eq!(predicted, refused);
        }

        #[test]
        fn prop_fingerprint_ignores_signer_order(
            indices in prop::collection::btree_set(0u64..1000, 1..8),
            seed in any::<u8>(),
        ) {
            let signers: Vec<Signer> = indices
                .iter()
                .map(|i| Signer::new(*i, [(*i % 251) as u8 ^ seed; 48]))
                .collect();
            let mut reversed = signers.clone();
            reversed.reverse();

            let a = Fingerprint::compute(&[seed; 32], &canonicalize(&signers), &[1u8; 96]);
            let b = Fingerprint::compute(&[seed; 32], &canonicalize(&reversed), &[1u8; 96]);
            prop_assert_eq!(a, b);
        }
    }
}
