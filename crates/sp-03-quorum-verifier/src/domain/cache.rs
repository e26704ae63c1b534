//! # Verification Result Cache
//!
//! Fingerprint to outcome, split over independently locked LRU shards.
//!
//! - Positive and negative outcomes are both cached
//! - The first outcome stored for a fingerprint wins until it is evicted or
//!   expires; later inserts return the stored outcome
//! - Expired entries behave as misses and are dropped on access
//!
//! Locks are held only for the map operation itself. Callers do the pairing
//! work between `get` and `insert`.
//!
//! Reads never wait: a shard locked by a writer reports a miss, and recency is
//! only refreshed when the shard is free. A contended miss costs one extra
//! verification, never a different outcome.

use super::errors::QuorumResult;
use super::fingerprint::Fingerprint;
use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

#[derive(Clone)]
struct CacheEntry {
    outcome: QuorumResult<()>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Option<Duration>) -> bool {
        ttl.is_some_and(|ttl| self.inserted_at.elapsed() >= ttl)
    }
}

pub struct VerificationCache {
    shards: Vec<RwLock<LruCache<Fingerprint, CacheEntry>>>,
    ttl: Option<Duration>,
}

impl VerificationCache {
    /// `capacity` is spread evenly over `shards`; each shard holds at least one
    /// entry.
    pub fn new(capacity: usize, shards: usize, ttl: Option<Duration>) -> Self {
        let shards = shards.max(1);
        let per_shard = NonZeroUsize::new(capacity.div_ceil(shards)).unwrap_or(NonZeroUsize::MIN);
        Self {
            shards: (0..shards)
                .map(|_| RwLock::new(LruCache::new(per_shard)))
                .collect(),
            ttl,
        }
    }

    fn shard(&self, fingerprint: &Fingerprint) -> &RwLock<LruCache<Fingerprint, CacheEntry>> {
        &self.shards[fingerprint.shard(self.shards.len())]
    }

    /// Stored outcome, if present and fresh.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<QuorumResult<()>> {
        let shard = self.shard(fingerprint);
        let fresh = {
            let entries = shard.try_read()?;
            let entry = entries.peek(fingerprint)?;
            (!entry.is_expired(self.ttl)).then(|| entry.outcome.clone())
        };

        if let Some(mut entries) = shard.try_write() {
            match fresh {
                Some(_) => {
                    entries.get(fingerprint);
                }
                None => {
                    if entries
                        .peek(fingerprint)
                        .is_some_and(|entry| entry.is_expired(self.ttl))
                    {
                        entries.pop(fingerprint);
                    }
                }
            }
        }
        fresh
    }

    /// Store an outcome unless a fresh one is already present. Returns the
    /// outcome that is now cached.
    pub fn insert(&self, fingerprint: Fingerprint, outcome: QuorumResult<()>) -> QuorumResult<()> {
        let mut shard = self.shard(&fingerprint).write();
        if let Some(existing) = shard.peek(&fingerprint) {
            if !existing.is_expired(self.ttl) {
                return existing.outcome.clone();
            }
        }
        shard.put(
            fingerprint,
            CacheEntry {
                outcome: outcome.clone(),
                inserted_at: Instant::now(),
            },
        );
        outcome
    }

    /// Entries across all shards, expired ones included until touched.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().cap().get()).sum()
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub fn clear(&self) {
        for shard in &self.shards {
            shard.write().clear();
        }
    }
}
