//! # Tree Hashing
//!
//! Minimal SSZ merkleization for the fixed containers the signer handles.
//!
//! - basic values are packed little-endian into a 32-byte chunk
//! - containers merkleize their field roots, padded with zero chunks to a
//!   power of two
//! - byte lists merkleize their packed chunks up to the list limit and mix in
//!   the length

use crate::primitives::Root;
use sha2::{Digest, Sha256};

/// Size of a merkle leaf.
pub const BYTES_PER_CHUNK: usize = 32;

/// All-zero leaf used for padding.
pub const ZERO_CHUNK: Root = [0u8; BYTES_PER_CHUNK];

/// Types with a canonical tree-hash root.
pub trait TreeHash {
    fn tree_hash_root(&self) -> Root;
}

impl TreeHash for u64 {
    fn tree_hash_root(&self) -> Root {
        u64_chunk(*self)
    }
}

impl TreeHash for Root {
    fn tree_hash_root(&self) -> Root {
        *self
    }
}

/// SHA-256 of two concatenated chunks.
pub fn hash_pair(left: &Root, right: &Root) -> Root {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Little-endian u64 padded to a chunk.
pub fn u64_chunk(value: u64) -> Root {
    let mut chunk = ZERO_CHUNK;
    chunk[..8].copy_from_slice(&value.to_le_bytes());
    chunk
}

/// Right-pad up to 32 bytes into a single chunk.
///
/// Inputs longer than a chunk are truncated; callers only pass fixed vectors
/// of at most 32 bytes.
pub fn bytes_chunk(bytes: &[u8]) -> Root {
    let mut chunk = ZERO_CHUNK;
    let len = bytes.len().min(BYTES_PER_CHUNK);
    chunk[..len].copy_from_slice(&bytes[..len]);
    chunk
}

/// Split bytes into zero-padded chunks.
pub fn pack_bytes(bytes: &[u8]) -> Vec<Root> {
    bytes.chunks(BYTES_PER_CHUNK).map(bytes_chunk).collect()
}

/// Merkleize chunks, padding to the next power of two.
pub fn merkleize(chunks: &[Root]) -> Root {
    merkleize_with_limit(chunks, chunks.len())
}

/// Merkleize chunks as a tree sized for `limit` leaves.
pub fn merkleize_with_limit(chunks: &[Root], limit: usize) -> Root {
    let width = limit.max(chunks.len()).max(1).next_power_of_two();
    let mut layer = chunks.to_vec();
    layer.resize(width, ZERO_CHUNK);

    while layer.len() > 1 {
        layer = layer
            .chunks_exact(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }
    layer[0]
}

/// Mix a list length into its content root.
pub fn mix_in_length(root: &Root, length: usize) -> Root {
    hash_pair(root, &u64_chunk(length as u64))
}

/// Root of a byte list bounded by `max_len` bytes.
pub fn byte_list_root(bytes: &[u8], max_len: usize) -> Root {
    let limit_chunks = max_len.div_ceil(BYTES_PER_CHUNK);
    let root = merkleize_with_limit(&pack_bytes(bytes), limit_chunks);
    mix_in_length(&root, bytes.len())
}

/// Root of a fixed byte vector longer than one chunk (e.g. a signature).
pub fn byte_vector_root(bytes: &[u8]) -> Root {
    merkleize(&pack_bytes(bytes))
}
