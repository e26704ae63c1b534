//! Driven Ports (SPI - Outbound Dependencies)
//!
//! ## Persistence Contract
//!
//! - `store` is all-or-nothing per record: after a crash the stored record is
//!   either the previous one or the new one, never a mix
//! - a successful `store` survives a crash
//! - `load` of a never-stored identity is `Ok(None)`
//!
//! Production: `FileSlashingStore`, `RocksDbSlashingStore` (feature `rocksdb`)
//! Testing: `InMemorySlashingStore`

use crate::domain::SlashingRecord;
use shared_types::ValidatorPubKey;
use std::sync::Arc;
use thiserror::Error;

/// Persistence failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying I/O failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Record bytes could not be encoded or decoded
    #[error("codec error: {message}")]
    Codec { message: String },

    /// Record written by an unknown format version
    #[error("unsupported record format version {version}")]
    UnsupportedVersion { version: u8 },

    /// Another process holds the protection database
    #[error("protection database already in use: {message}")]
    Locked { message: String },

    /// Store refuses writes
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io {
            message: e.to_string(),
        }
    }
}

/// Durable per-identity record storage.
pub trait SlashingStore: Send + Sync {
    /// Read the record for an identity.
    fn load(&self, identity: &ValidatorPubKey) -> Result<Option<SlashingRecord>, StoreError>;

    /// Durably replace the record for `record.identity`.
    fn store(&self, record: &SlashingRecord) -> Result<(), StoreError>;

    /// Delete the record. Deleting a missing record succeeds.
    fn remove(&self, identity: &ValidatorPubKey) -> Result<(), StoreError>;

    /// All identities with a stored record.
    fn identities(&self) -> Result<Vec<ValidatorPubKey>, StoreError>;
}

impl<S: SlashingStore + ?Sized> SlashingStore for Arc<S> {
    fn load(&self, identity: &ValidatorPubKey) -> Result<Option<SlashingRecord>, StoreError> {
        (**self).load(identity)
    }

    fn store(&self, record: &SlashingRecord) -> Result<(), StoreError> {
        (**self).store(record)
    }

    fn remove(&self, identity: &ValidatorPubKey) -> Result<(), StoreError> {
        (**self).remove(identity)
    }

    fn identities(&self) -> Result<Vec<ValidatorPubKey>, StoreError> {
        (**self).identities()
    }
}
