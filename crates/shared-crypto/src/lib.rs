//! # Shared Crypto
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `bls` | BLS12-381 (min-pk, proof-of-possession ciphersuite) | Share signing, committee aggregation |
//! | `hashing` | BLAKE3 | Verification-cache fingerprints |
//!
//! ## Security Properties
//!
//! - **BLS**: deterministic signatures, so a repeated request yields the same bytes
//! - **Secret keys**: zeroized on drop, redacted in `Debug`, compared in constant time
//! - **Public keys**: subgroup-checked on parse, identity point rejected

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bls;
pub mod errors;
pub mod hashing;

// Re-exports
pub use bls::{
    BlsPublicKey, BlsSecretKey, BlsSignature, BLS_DST, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES,
    SIGNATURE_BYTES,
};
pub use errors::CryptoError;
pub use hashing::{blake3_hash, Blake3Hasher, Hash};
