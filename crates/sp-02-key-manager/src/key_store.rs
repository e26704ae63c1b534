//! # Key Share Store
//!
//! In-memory map from identity to share. Reads run concurrently; writes are
//! short and only happen on registration and removal.

use crate::domain::{SignerError, SignerResult, ValidatorShare};
use parking_lot::RwLock;
use shared_crypto::BlsSecretKey;
use shared_types::ValidatorPubKey;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of inserting a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    /// The same secret was already present
    AlreadyPresent,
}

#[derive(Default)]
pub struct KeyShareStore {
    shares: RwLock<HashMap<ValidatorPubKey, Arc<ValidatorShare>>>,
}

impl KeyShareStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a share keyed by its derived identity.
    ///
    /// Re-adding the same secret is a no-op. A different secret under an
    /// existing identity is refused.
    pub fn insert(&self, secret: BlsSecretKey) -> SignerResult<(ValidatorPubKey, Insertion)> {
        let share = ValidatorShare::new(secret);
        let identity = *share.identity();

        let mut shares = self.shares.write();
        if let Some(existing) = shares.get(&identity) {
            return if existing.same_secret_as(&share) {
                Ok((identity, Insertion::AlreadyPresent))
            } else {
                Err(SignerError::AlreadyRegistered { identity })
            };
        }
        shares.insert(identity, Arc::new(share));
        Ok((identity, Insertion::Added))
    }

    pub fn lookup(&self, identity: &ValidatorPubKey) -> SignerResult<Arc<ValidatorShare>> {
        self.shares
            .read()
            .get(identity)
            .cloned()
            .ok_or(SignerError::UnknownIdentity {
                identity: *identity,
            })
    }

    pub fn contains(&self, identity: &ValidatorPubKey) -> bool {
        self.shares.read().contains_key(identity)
    }

    pub fn remove(&self, identity: &ValidatorPubKey) -> Option<Arc<ValidatorShare>> {
        self.shares.write().remove(identity)
    }

    /// Identities in key order.
    pub fn identities(&self) -> Vec<ValidatorPubKey> {
        let mut ids: Vec<_> = self.shares.read().keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.shares.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.read().is_empty()
    }
}
