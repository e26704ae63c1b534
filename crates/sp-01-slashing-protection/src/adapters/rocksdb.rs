//! # RocksDB Store
//!
//! Records keyed by the 48 raw public key bytes in the default column family.
//! Every put is a single-key write with `sync` set, so an acknowledged write
//! is on disk.

use super::codec::{decode_record, encode_record};
use crate::domain::SlashingRecord;
use crate::ports::outbound::{SlashingStore, StoreError};
use rocksdb::{IteratorMode, Options, WriteOptions, DB};
use shared_types::ValidatorPubKey;

/// RocksDB configuration
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: String,
    /// Block cache size in bytes (default: 8MB, records are tiny)
    pub block_cache_size: usize,
    /// fsync after each write (default: true)
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: "./data/slashing-protection".to_string(),
            block_cache_size: 8 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Config for tests (no sync)
    pub fn for_testing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 1024 * 1024,
            sync_writes: false,
        }
    }
}

pub struct RocksDbSlashingStore {
    db: DB,
    config: RocksDbConfig,
}

fn db_error(e: rocksdb::Error) -> StoreError {
    StoreError::Io {
        message: e.to_string(),
    }
}

impl RocksDbSlashingStore {
    /// Open or create the database. RocksDB's own `LOCK` file keeps a second
    /// process out.
    pub fn open(config: RocksDbConfig) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open(&opts, &config.path).map_err(|e| StoreError::Locked {
            message: format!("Failed to open RocksDB at {}: {}", config.path, e),
        })?;

        Ok(Self { db, config })
    }

    fn write_options(&self) -> WriteOptions {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.config.sync_writes);
        opts
    }
}

impl SlashingStore for RocksDbSlashingStore {
    fn load(&self, identity: &ValidatorPubKey) -> Result<Option<SlashingRecord>, StoreError> {
        match self.db.get(identity.as_bytes()).map_err(db_error)? {
            Some(bytes) => decode_record(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn store(&self, record: &SlashingRecord) -> Result<(), StoreError> {
        let bytes = encode_record(record)?;
        self.db
            .put_opt(record.identity.as_bytes(), bytes, &self.write_options())
            .map_err(db_error)
    }

    fn remove(&self, identity: &ValidatorPubKey) -> Result<(), StoreError> {
        self.db
            .delete_opt(identity.as_bytes(), &self.write_options())
            .map_err(db_error)
    }

    fn identities(&self) -> Result<Vec<ValidatorPubKey>, StoreError> {
        let mut identities = Vec::new();
        for item in self.db.iterator(IteratorMode::Start) {
            let (key, _) = item.map_err(db_error)?;
            if let Ok(identity) = ValidatorPubKey::from_slice(&key) {
                identities.push(identity);
            }
        }
        Ok(identities)
    }
}
