//! # BLAKE3 Hashing
//!
//! Used for verification-cache fingerprints, where speed matters more than
//! agreement with any external format.

use blake3::Hasher;

/// BLAKE3 hash output (256-bit).
pub type Hash = [u8; 32];

/// Stateful BLAKE3 hasher.
pub struct Blake3Hasher {
    inner: Hasher,
}

impl Blake3Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Hasher::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(&self) -> Hash {
        let hash = self.inner.finalize();
        *hash.as_bytes()
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with BLAKE3 (one-shot).
pub fn blake3_hash(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}
