//! # Slashing Protection Ledger
//!
//! Atomic check-then-record per identity.
//!
//! ## Critical Section
//!
//! Each identity has its own `Mutex<()>`, created lazily in a sharded map.
//! The map shard is locked only long enough to clone the `Arc`; the
//! identity mutex is then held across load, rule check and the durable write.
//! Different identities never wait on each other.
//!
//! ```text
//! authorize ──► identity lock ──► load ──► rule ──► store (fsync) ──► Ok
//!                                           │          │
//!                                           ▼          ▼
//!                                      Slashable   Persistence
//!                                  (record untouched, no signature)
//! ```

use crate::domain::errors::ProtectionResult;
use crate::domain::rules;
use crate::domain::{AttestationVote, ProposalVote, ProtectionError, SlashingRecord};
use crate::ports::inbound::SlashingProtectionApi;
use crate::ports::outbound::SlashingStore;
use dashmap::DashMap;
use parking_lot::Mutex;
use shared_types::ValidatorPubKey;
use sp_telemetry::{log_event, log_signing_event};
use std::sync::Arc;

const COMPONENT: &str = "slashing-protection";

pub struct SlashingProtectionLedger<S: SlashingStore> {
    store: S,
    /// Entries are never removed, so a re-registered identity keeps its lock.
    locks: DashMap<ValidatorPubKey, Arc<Mutex<()>>>,
}

impl<S: SlashingStore> SlashingProtectionLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: DashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Clone out the identity's lock; the shard guard drops with the statement.
    fn identity_lock(&self, identity: &ValidatorPubKey) -> Arc<Mutex<()>> {
        self.locks.entry(*identity).or_default().clone()
    }

    /// Load an existing record. A missing record fails closed.
    fn load_existing(&self, identity: &ValidatorPubKey) -> ProtectionResult<SlashingRecord> {
        self.store
            .load(identity)?
            .ok_or(ProtectionError::UnknownIdentity {
                identity: *identity,
            })
    }

    fn persist(&self, record: &SlashingRecord) -> ProtectionResult<()> {
        self.store.store(record).map_err(|e| {
            log_event!(
                error,
                COMPONENT,
                "Failed to persist slashing record, refusing to sign",
                "pubKey" = %record.identity,
                error = %e
            );
            ProtectionError::Persistence(e)
        })
    }

    /// Current record, if the identity is known.
    pub fn record(&self, identity: &ValidatorPubKey) -> ProtectionResult<SlashingRecord> {
        self.load_existing(identity)
    }

    pub fn identities(&self) -> ProtectionResult<Vec<ValidatorPubKey>> {
        Ok(self.store.identities()?)
    }
}

impl<S: SlashingStore> SlashingProtectionApi for SlashingProtectionLedger<S> {
    fn authorize_attestation(
        &self,
        identity: &ValidatorPubKey,
        vote: AttestationVote,
    ) -> ProtectionResult<()> {
        if !vote.is_well_formed() {
            return Err(ProtectionError::MalformedVote { vote });
        }

        let lock = self.identity_lock(identity);
        let _guard = lock.lock();

        let mut record = self.load_existing(identity)?;
        if !rules::attestation_is_safe(record.highest_attestation.as_ref(), &vote) {
            // A safe-check failure implies a recorded vote exists
            let highest = record.highest_attestation.unwrap_or(vote);
            log_signing_event!(
                warn,
                "Refused slashable attestation",
                identity,
                "attester",
                candidate = %vote,
                highest = %highest
            );
            return Err(ProtectionError::SlashableAttestation {
                identity: *identity,
                candidate: vote,
                highest,
            });
        }

        record.highest_attestation = Some(vote);
        self.persist(&record)?;

        log_signing_event!(debug, "Attestation authorized", identity, "attester", vote = %vote);
        Ok(())
    }

    fn authorize_proposal(
        &self,
        identity: &ValidatorPubKey,
        vote: ProposalVote,
    ) -> ProtectionResult<()> {
        let lock = self.identity_lock(identity);
        let _guard = lock.lock();

        let mut record = self.load_existing(identity)?;
        if !rules::proposal_is_safe(record.highest_proposal.as_ref(), &vote) {
            let highest = record.highest_proposal.unwrap_or(vote);
            log_signing_event!(
                warn,
                "Refused slashable proposal",
                identity,
                "proposer",
                candidate = %vote,
                highest = %highest
            );
            return Err(ProtectionError::SlashableProposal {
                identity: *identity,
                candidate: vote,
                highest,
            });
        }

        record.highest_proposal = Some(vote);
        self.persist(&record)?;

        log_signing_event!(debug, "Proposal authorized", identity, "proposer", slot = vote.slot);
        Ok(())
    }

    fn initialize(&self, identity: &ValidatorPubKey) -> ProtectionResult<bool> {
        let lock = self.identity_lock(identity);
        let _guard = lock.lock();

        if self.store.load(identity)?.is_some() {
            return Ok(false);
        }
        self.persist(&SlashingRecord::empty(*identity))?;
        log_event!(debug, COMPONENT, "Created empty slashing record", "pubKey" = %identity);
        Ok(true)
    }

    fn bump_protection(
        &self,
        identity: &ValidatorPubKey,
        min_attestation: AttestationVote,
        min_proposal: ProposalVote,
    ) -> ProtectionResult<SlashingRecord> {
        if !min_attestation.is_well_formed() {
            return Err(ProtectionError::MalformedVote {
                vote: min_attestation,
            });
        }

        let lock = self.identity_lock(identity);
        let _guard = lock.lock();

        let current = self.load_existing(identity)?;
        let bumped = SlashingRecord {
            identity: *identity,
            highest_attestation: Some(rules::raise_attestation(
                current.highest_attestation,
                &min_attestation,
            )),
            highest_proposal: Some(rules::raise_proposal(
                current.highest_proposal,
                &min_proposal,
            )),
        };

        if bumped != current {
            self.persist(&bumped)?;
            log_event!(
                info,
                COMPONENT,
                "Raised slashing protection floors",
                "pubKey" = %identity,
                attestation = ?bumped.highest_attestation,
                proposal = ?bumped.highest_proposal
            );
        }
        Ok(bumped)
    }

    fn highest_attestation(
        &self,
        identity: &ValidatorPubKey,
    ) -> ProtectionResult<Option<AttestationVote>> {
        Ok(self.load_existing(identity)?.highest_attestation)
    }

    fn highest_proposal(
        &self,
        identity: &ValidatorPubKey,
    ) -> ProtectionResult<Option<ProposalVote>> {
        Ok(self.load_existing(identity)?.highest_proposal)
    }

    fn is_attestation_slashable(
        &self,
        identity: &ValidatorPubKey,
        vote: &AttestationVote,
    ) -> ProtectionResult<bool> {
        if !vote.is_well_formed() {
            return Err(ProtectionError::MalformedVote { vote: *vote });
        }
        let record = self.load_existing(identity)?;
        Ok(!rules::attestation_is_safe(
            record.highest_attestation.as_ref(),
            vote,
        ))
    }

    fn is_proposal_slashable(
        &self,
        identity: &ValidatorPubKey,
        vote: &ProposalVote,
    ) -> ProtectionResult<bool> {
        let record = self.load_existing(identity)?;
        Ok(!rules::proposal_is_safe(record.highest_proposal.as_ref(), vote))
    }

    fn remove(&self, identity: &ValidatorPubKey) -> ProtectionResult<()> {
        let lock = self.identity_lock(identity);
        let _guard = lock.lock();

        self.store.remove(identity)?;
        log_event!(info, COMPONENT, "Removed slashing record", "pubKey" = %identity);
        Ok(())
    }
}
