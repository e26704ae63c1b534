//! In-memory store for tests and ephemeral nodes.

use crate::domain::SlashingRecord;
use crate::ports::outbound::{SlashingStore, StoreError};
use parking_lot::{Mutex, RwLock};
use shared_types::ValidatorPubKey;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Records held in a map. Nothing survives the process.
///
/// Writes can be switched off to exercise the persistence-failure path.
#[derive(Default)]
pub struct InMemorySlashingStore {
    records: RwLock<HashMap<ValidatorPubKey, SlashingRecord>>,
    fail_writes: AtomicBool,
    write_limit: Mutex<Option<u64>>,
    writes: AtomicU64,
}

impl InMemorySlashingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `store`/`remove` fail, or succeed again.
    /// Clears any budget set by [`Self::fail_writes_after`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
        *self.write_limit.lock() = None;
    }

    /// Let `n` more writes succeed, then fail every write after them.
    pub fn fail_writes_after(&self, n: u64) {
        *self.write_limit.lock() = Some(self.write_count() + n);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                message: "writes disabled".to_string(),
            });
        }
        if let Some(limit) = *self.write_limit.lock() {
            if self.write_count() >= limit {
                return Err(StoreError::Unavailable {
                    message: "write limit reached".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl SlashingStore for InMemorySlashingStore {
    fn load(&self, identity: &ValidatorPubKey) -> Result<Option<SlashingRecord>, StoreError> {
        Ok(self.records.read().get(identity).cloned())
    }

    fn store(&self, record: &SlashingRecord) -> Result<(), StoreError> {
        self.check_writable()?;
        self.records.write().insert(record.identity, record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, identity: &ValidatorPubKey) -> Result<(), StoreError> {
        self.check_writable()?;
        self.records.write().remove(identity);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn identities(&self) -> Result<Vec<ValidatorPubKey>, StoreError> {
        Ok(self.records.read().keys().copied().collect())
    }
}
