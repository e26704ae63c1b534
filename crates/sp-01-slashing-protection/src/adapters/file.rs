//! # File Store
//!
//! One file per identity under a locked directory.
//!
//! ## Write Path
//!
//! 1. encode to `<pubkey>.slashing.tmp`
//! 2. fsync the temp file
//! 3. rename over `<pubkey>.slashing`
//! 4. fsync the directory so the rename itself is durable
//!
//! A crash at any step leaves either the old or the new record in place.

use super::codec::{decode_record, encode_record};
use super::lock::DirectoryLock;
use crate::domain::SlashingRecord;
use crate::ports::outbound::{SlashingStore, StoreError};
use shared_types::ValidatorPubKey;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const RECORD_EXTENSION: &str = "slashing";
const TEMP_EXTENSION: &str = "slashing.tmp";

pub struct FileSlashingStore {
    dir: PathBuf,
    _lock: DirectoryLock,
}

impl FileSlashingStore {
    /// Open (creating if needed) a protection directory and lock it.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let lock = DirectoryLock::acquire(&dir)?;

        let store = Self { dir, _lock: lock };
        store.remove_stale_temp_files()?;

        info!(
            path = %store.dir.display(),
            records = store.identities()?.len(),
            "Opened slashing protection store"
        );
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, identity: &ValidatorPubKey) -> PathBuf {
        self.dir
            .join(format!("{}.{}", identity.to_hex(), RECORD_EXTENSION))
    }

    fn temp_path(&self, identity: &ValidatorPubKey) -> PathBuf {
        self.dir.join(format!("{}.{}", identity.to_hex(), TEMP_EXTENSION))
    }

    fn sync_dir(&self) -> Result<(), StoreError> {
        File::open(&self.dir)?.sync_all()?;
        Ok(())
    }

    /// Leftovers from writes interrupted before the rename.
    fn remove_stale_temp_files(&self) -> Result<(), StoreError> {
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_temp = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.ends_with(TEMP_EXTENSION))
                .unwrap_or(false);
            if is_temp {
                debug!(path = %path.display(), "Removing interrupted record write");
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

impl SlashingStore for FileSlashingStore {
    fn load(&self, identity: &ValidatorPubKey) -> Result<Option<SlashingRecord>, StoreError> {
        match fs::read(self.record_path(identity)) {
            Ok(bytes) => decode_record(&bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, record: &SlashingRecord) -> Result<(), StoreError> {
        let bytes = encode_record(record)?;
        let temp_path = self.temp_path(&record.identity);

        let written = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(&bytes)?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&temp_path, self.record_path(&record.identity)));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    debug!(path = %temp_path.display(), error = %cleanup, "Temp record left behind");
                }
            }
            return Err(e.into());
        }
        self.sync_dir()
    }

    fn remove(&self, identity: &ValidatorPubKey) -> Result<(), StoreError> {
        match fs::remove_file(self.record_path(identity)) {
            Ok(()) => self.sync_dir(),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn identities(&self) -> Result<Vec<ValidatorPubKey>, StoreError> {
        let mut identities = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Foreign files in the directory are ignored
            if let Ok(identity) = ValidatorPubKey::from_hex(stem) {
                identities.push(identity);
            }
        }
        identities.sort();
        Ok(identities)
    }
}
