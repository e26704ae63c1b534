//! Signing Service - Core business logic
//!
//! Owns the key share store and the slashing ledger; nothing else mutates
//! either.
//!
//! # Ordering
//! - Signing root is computed and the payload validated first
//! - Slashable duties go through the ledger, which persists before returning
//! - Only then is the key looked up and the signature produced
//!
//! A process crash between ledger commit and signature release loses a
//! signature but can never produce a slashable pair.

use crate::config::KeyManagerConfig;
use crate::domain::signing_root::{beacon_signing_root, protocol_signing_root};
use crate::domain::{SignerError, SignerResult, ValidatorShare};
use crate::key_store::{Insertion, KeyShareStore};
use crate::metrics;
use crate::ports::{KeyManager, SystemTimeSource, TimeSource};
use shared_crypto::{BlsSecretKey, BlsSignature};
use shared_types::{
    BeaconObject, ConsensusMessage, Domain, DutyType, Root, SignatureType, ValidatorPubKey,
    SIGNATURE_LENGTH,
};
use sp_01_slashing_protection::{
    AttestationVote, FileSlashingStore, ProposalVote, ProtectionError, SlashingProtectionApi,
    SlashingProtectionLedger, SlashingRecord, SlashingStore,
};
use sp_telemetry::fields::ShortHex;
use sp_telemetry::{log_event, log_signing_event};
use std::sync::Arc;

const COMPONENT: &str = "key-manager";

/// Signing Service
pub struct SigningService<S: SlashingStore> {
    config: KeyManagerConfig,
    keys: KeyShareStore,
    ledger: SlashingProtectionLedger<S>,
    time_source: Box<dyn TimeSource>,
}

impl SigningService<FileSlashingStore> {
    /// Open the file-backed protection database at `config.slashing_db_path`.
    pub fn open(config: KeyManagerConfig) -> SignerResult<Self> {
        let store = FileSlashingStore::open(&config.slashing_db_path)
            .map_err(|e| SignerError::PersistenceFailure(e.to_string()))?;
        Ok(Self::new(config, store))
    }
}

impl<S: SlashingStore> SigningService<S> {
    /// Create a new SigningService over a protection store
    pub fn new(config: KeyManagerConfig, store: S) -> Self {
        log_event!(
            info,
            COMPONENT,
            "Signing service created",
            network = %config.network.name,
            domainType = %config.network.domain_type
        );
        Self {
            config,
            keys: KeyShareStore::new(),
            ledger: SlashingProtectionLedger::new(store),
            time_source: Box::new(SystemTimeSource),
        }
    }

    /// Replace the clock used to derive protection floors
    pub fn with_time_source(mut self, time_source: Box<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    pub fn config(&self) -> &KeyManagerConfig {
        &self.config
    }

    /// Read access to the ledger, for dry runs and inspection
    pub fn ledger(&self) -> &SlashingProtectionLedger<S> {
        &self.ledger
    }

    /// Raise an identity's protection to the clock-derived floors.
    ///
    /// Attestation floor: target = current epoch + configured distance,
    /// source = target - 1. Proposal floor: current slot + configured
    /// distance. Existing higher votes are kept.
    pub fn bump_slashing_protection(
        &self,
        identity: &ValidatorPubKey,
    ) -> SignerResult<SlashingRecord> {
        let clock = &self.config.network.clock;
        let current_slot = self.time_source.current_slot(clock);
        let target = clock
            .epoch_at_slot(current_slot)
            .saturating_add(self.config.min_attestation_protection_epochs);
        let min_attestation = AttestationVote::new(target.saturating_sub(1), target);
        let min_proposal = ProposalVote::new(
            current_slot.saturating_add(self.config.min_block_protection_slots),
        );

        Ok(self
            .ledger
            .bump_protection(identity, min_attestation, min_proposal)?)
    }

    /// Authorize a slashable duty. Non-slashable duties pass through.
    fn authorize(
        &self,
        object: &BeaconObject,
        identity: &ValidatorPubKey,
        duty: DutyType,
    ) -> SignerResult<()> {
        let result = match (duty, object) {
            (DutyType::Attester, BeaconObject::Attestation(data)) => self
                .ledger
                .authorize_attestation(identity, AttestationVote::from(data)),
            (DutyType::Proposer, BeaconObject::Block(header)) => self
                .ledger
                .authorize_proposal(identity, ProposalVote::new(header.slot)),
            _ => Ok(()),
        };

        result.map_err(|e| {
            match &e {
                ProtectionError::SlashableAttestation { .. } => {
                    metrics::record_slashing_refusal("attestation")
                }
                ProtectionError::SlashableProposal { .. } => {
                    metrics::record_slashing_refusal("proposal")
                }
                _ => {}
            }
            SignerError::from(e)
        })
    }

    fn sign_with(
        &self,
        share: &ValidatorShare,
        signing_root: &Root,
    ) -> SignerResult<[u8; SIGNATURE_LENGTH]> {
        let signature: BlsSignature = share.sign(signing_root);
        if self.config.verify_after_sign && !share.public_key().verify(signing_root, &signature) {
            return Err(SignerError::SigningFailure(format!(
                "signature for {} failed self-verification",
                share.identity()
            )));
        }
        Ok(signature.to_bytes())
    }
}

impl<S: SlashingStore> KeyManager for SigningService<S> {
    fn add_share(&self, secret_key: &[u8]) -> SignerResult<ValidatorPubKey> {
        let secret = BlsSecretKey::from_bytes(secret_key)?;
        let (identity, insertion) = self.keys.insert(secret)?;

        // A share without a protection record cannot sign, so undo the insert
        if let Err(e) = self.ledger.initialize(&identity) {
            if insertion == Insertion::Added {
                self.keys.remove(&identity);
            }
            return Err(e.into());
        }

        if insertion == Insertion::Added {
            if self.config.bump_on_register {
                // Without its floors the share could re-sign below them on retry
                if let Err(e) = self.bump_slashing_protection(&identity) {
                    self.keys.remove(&identity);
                    return Err(e);
                }
            }
            metrics::set_shares_registered(self.keys.len());
            log_event!(info, COMPONENT, "Share registered", "pubKey" = %identity);
        }
        Ok(identity)
    }

    fn lookup(&self, identity: &ValidatorPubKey) -> SignerResult<Arc<ValidatorShare>> {
        self.keys.lookup(identity)
    }

    fn sign_beacon_object(
        &self,
        object: &BeaconObject,
        domain: &Domain,
        identity: &ValidatorPubKey,
        duty: DutyType,
    ) -> SignerResult<(Root, [u8; SIGNATURE_LENGTH])> {
        let signing_root = beacon_signing_root(object, duty, domain)?;
        self.authorize(object, identity, duty)?;

        let share = self.keys.lookup(identity)?;
        let signature = self.sign_with(&share, &signing_root)?;

        metrics::record_signature(duty.as_str());
        log_signing_event!(
            debug,
            "Signed beacon object",
            identity,
            duty,
            "signingRoot" = %ShortHex(&signing_root, 8)
        );
        Ok((signing_root, signature))
    }

    fn sign_root(
        &self,
        message: &ConsensusMessage,
        signature_type: SignatureType,
        identity: &ValidatorPubKey,
    ) -> SignerResult<[u8; SIGNATURE_LENGTH]> {
        let signing_root =
            protocol_signing_root(message, self.config.network.domain_type, signature_type)?;
        let share = self.keys.lookup(identity)?;
        let signature = self.sign_with(&share, &signing_root)?;

        metrics::record_signature(DutyType::ConsensusProtocolMessage.as_str());
        log_signing_event!(
            debug,
            "Signed protocol message",
            identity,
            DutyType::ConsensusProtocolMessage,
            height = message.height,
            round = message.round,
            "signingRoot" = %ShortHex(&signing_root, 8)
        );
        Ok(signature)
    }

    fn remove_share(&self, identity: &ValidatorPubKey) -> SignerResult<()> {
        if !self.keys.contains(identity) {
            return Err(SignerError::UnknownIdentity {
                identity: *identity,
            });
        }
        // Record first: a failed delete keeps the share and its history together
        self.ledger.remove(identity)?;
        self.keys.remove(identity);
        metrics::set_shares_registered(self.keys.len());
        log_event!(info, COMPONENT, "Share removed", "pubKey" = %identity);
        Ok(())
    }

    fn list_identities(&self) -> Vec<ValidatorPubKey> {
        self.keys.identities()
    }
}
