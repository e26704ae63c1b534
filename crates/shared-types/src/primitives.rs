//! # Primitives
//!
//! Scalar chain types and the validator identity key.

use crate::errors::TypesError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

/// Beacon-chain epoch number.
pub type Epoch = u64;

/// Beacon-chain slot number.
pub type Slot = u64;

/// 32-byte SSZ root.
pub type Root = [u8; 32];

/// Committee member index (operator id) within a signing committee.
pub type OperatorId = u64;

/// Compressed BLS12-381 G1 public key length.
pub const PUBLIC_KEY_LENGTH: usize = 48;

/// Compressed BLS12-381 G2 signature length.
pub const SIGNATURE_LENGTH: usize = 96;

/// Validator identity: a compressed BLS public key.
///
/// The bytes are not checked to be a valid curve point here; the crypto
/// layer does that when the key is actually used.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ValidatorPubKey(#[serde_as(as = "Bytes")] [u8; PUBLIC_KEY_LENGTH]);

impl ValidatorPubKey {
    /// Wrap raw key bytes.
    pub const fn new(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypesError> {
        let array: [u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| TypesError::InvalidLength {
                what: "public key",
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Parse from a hex string, with or without `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw).map_err(|_| TypesError::InvalidLength {
            what: "public key hex",
            expected: PUBLIC_KEY_LENGTH * 2,
            actual: raw.len(),
        })?;
        Self::from_slice(&bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for ValidatorPubKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for ValidatorPubKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ValidatorPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for ValidatorPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First 8 bytes are enough to tell keys apart in logs
        write!(f, "ValidatorPubKey(0x{}..)", hex::encode(&self.0[..8]))
    }
}
