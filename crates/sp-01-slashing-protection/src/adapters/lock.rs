//! # Directory Lock
//!
//! Exclusive `fs2` lock on the protection directory. Two processes signing
//! with the same records would each see a stale highest vote, so the second
//! one must not start.

use crate::ports::outbound::StoreError;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Held for the lifetime of the store; released on drop.
pub struct DirectoryLock {
    /// The lock file handle (kept open to maintain lock)
    file: File,
    path: PathBuf,
    pid: u32,
}

impl DirectoryLock {
    const LOCK_FILE: &'static str = "LOCK";

    /// Acquire the lock without waiting.
    ///
    /// # Errors
    ///
    /// `StoreError::Locked` if another handle holds it.
    pub fn acquire(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(Self::LOCK_FILE);

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)?;

        if file.try_lock_exclusive().is_err() {
            let holder = Self::read_existing_pid(&path)
                .map(|pid| format!("process {}", pid))
                .unwrap_or_else(|| "unknown process".to_string());
            return Err(StoreError::Locked {
                message: format!("{} holds {}", holder, path.display()),
            });
        }

        let pid = std::process::id();
        let mut locked = file;
        locked.set_len(0)?;
        writeln!(locked, "{}", pid)?;
        locked.sync_all()?;

        Ok(Self {
            file: locked,
            path,
            pid,
        })
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing_pid(path: &Path) -> Option<u32> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

impl Drop for DirectoryLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
