//! Verifier configuration from environment variables.

use std::env;
use std::time::Duration;

/// Configuration for the quorum verifier cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Total cached outcomes across all shards
    pub cache_capacity: usize,

    /// Time an outcome stays valid; `None` keeps entries until evicted
    pub cache_ttl: Option<Duration>,

    /// Independently locked cache shards
    pub cache_shards: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 8192,
            cache_ttl: None,
            cache_shards: 16,
        }
    }
}

impl VerifierConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SP_VERIFIER_CACHE_CAPACITY`: Cached outcomes (default: 8192)
    /// - `SP_VERIFIER_CACHE_TTL_SECS`: Entry lifetime in seconds, 0 for none (default: 0)
    /// - `SP_VERIFIER_CACHE_SHARDS`: Shard count (default: 16)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let parse = |key: &str| env::var(key).ok().and_then(|v| v.parse::<u64>().ok());

        Self {
            cache_capacity: parse("SP_VERIFIER_CACHE_CAPACITY")
                .map(|v| v as usize)
                .unwrap_or(defaults.cache_capacity),
            cache_ttl: match parse("SP_VERIFIER_CACHE_TTL_SECS") {
                Some(0) => None,
                Some(secs) => Some(Duration::from_secs(secs)),
                None => defaults.cache_ttl,
            },
            cache_shards: parse("SP_VERIFIER_CACHE_SHARDS")
                .map(|v| (v as usize).max(1))
                .unwrap_or(defaults.cache_shards),
        }
    }

    /// Small cache with few shards, so eviction is easy to provoke.
    pub fn for_testing() -> Self {
        Self {
            cache_capacity: 64,
            cache_ttl: None,
            cache_shards: 4,
        }
    }
}
