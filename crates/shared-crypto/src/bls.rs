//! BLS12-381 Signature Implementation
//!
//! Minimal-public-key variant (48-byte G1 keys, 96-byte G2 signatures) with the
//! proof-of-possession ciphersuite used by beacon chains:
//! - share key parsing and signing
//! - signature and public key aggregation
//! - fast aggregate verification over one message

use blst::min_pk::{AggregatePublicKey, AggregateSignature, PublicKey, SecretKey, Signature};
use blst::BLST_ERROR;
use rand::RngCore;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::CryptoError;

/// Domain separation tag for BLS signatures (Ethereum 2.0 compatible)
pub const BLS_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Secret scalar length (big-endian).
pub const SECRET_KEY_BYTES: usize = 32;

/// Compressed G1 public key length.
pub const PUBLIC_KEY_BYTES: usize = 48;

/// Compressed G2 signature length.
pub const SIGNATURE_BYTES: usize = 96;

/// BLS secret key share.
///
/// The underlying scalar is wiped when dropped. `Debug` never prints it.
#[derive(Clone)]
pub struct BlsSecretKey(SecretKey);

impl BlsSecretKey {
    /// Generate a new random key
    pub fn generate() -> Result<Self, CryptoError> {
        let mut ikm = Zeroizing::new([0u8; 32]);
        rand::thread_rng().fill_bytes(&mut ikm[..]);
        SecretKey::key_gen(&ikm[..], &[])
            .map(Self)
            .map_err(|e| CryptoError::KeyGenerationFailed(format!("{:?}", e)))
    }

    /// Parse a 32-byte big-endian scalar.
    ///
    /// Rejects wrong lengths, zero, and values not below the group order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SECRET_KEY_BYTES {
            return Err(CryptoError::InvalidLength {
                what: "secret key",
                expected: SECRET_KEY_BYTES,
                actual: bytes.len(),
            });
        }
        SecretKey::from_bytes(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPrivateKey)
    }

    /// Raw scalar bytes, wiped when the returned buffer drops
    pub fn to_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_BYTES]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// Derive the public key
    pub fn public_key(&self) -> BlsPublicKey {
        BlsPublicKey(self.0.sk_to_pk())
    }

    /// Sign a message
    pub fn sign(&self, message: &[u8]) -> BlsSignature {
        BlsSignature(self.0.sign(message, BLS_DST, &[]))
    }

    /// Constant-time equality of the scalars
    pub fn ct_eq(&self, other: &Self) -> bool {
        let a = self.to_bytes();
        let b = other.to_bytes();
        a[..].ct_eq(&b[..]).into()
    }
}

impl fmt::Debug for BlsSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlsSecretKey(<redacted>)")
    }
}

/// BLS public key (48 bytes compressed)
#[derive(Clone, Debug)]
pub struct BlsPublicKey(PublicKey);

impl PartialEq for BlsPublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for BlsPublicKey {}

impl BlsPublicKey {
    /// Parse a compressed key, with subgroup and identity checks.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != PUBLIC_KEY_BYTES {
            return Err(CryptoError::InvalidLength {
                what: "public key",
                expected: PUBLIC_KEY_BYTES,
                actual: bytes.len(),
            });
        }
        PublicKey::key_validate(bytes)
            .map(BlsPublicKey)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Serialize to 48-byte compressed form
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
        self.0.compress()
    }

    /// Verify a signature against this public key
    pub fn verify(&self, message: &[u8], signature: &BlsSignature) -> bool {
        signature.0.verify(true, message, BLS_DST, &[], &self.0, false)
            == BLST_ERROR::BLST_SUCCESS
    }

    /// Aggregate multiple public keys into one
    ///
    /// The aggregated key can verify aggregated signatures.
    pub fn aggregate(keys: &[BlsPublicKey]) -> Result<Self, CryptoError> {
        if keys.is_empty() {
            return Err(CryptoError::InvalidInput("empty key list".into()));
        }
        let refs: Vec<&PublicKey> = keys.iter().map(|k| &k.0).collect();
        AggregatePublicKey::aggregate(&refs, false)
            .map(|apk| BlsPublicKey(apk.to_public_key()))
            .map_err(|_| CryptoError::AggregationFailed)
    }
}

/// BLS signature (96 bytes)
#[derive(Clone, Debug)]
pub struct BlsSignature(Signature);

impl PartialEq for BlsSignature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for BlsSignature {}

impl BlsSignature {
    /// Parse a compressed signature. Subgroup membership is checked on verify.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SIGNATURE_BYTES {
            return Err(CryptoError::InvalidLength {
                what: "signature",
                expected: SIGNATURE_BYTES,
                actual: bytes.len(),
            });
        }
        Signature::from_bytes(bytes)
            .map(BlsSignature)
            .map_err(|_| CryptoError::InvalidSignature)
    }

    /// Serialize to 96-byte form
    pub fn to_bytes(&self) -> [u8; SIGNATURE_BYTES] {
        self.0.compress()
    }

    /// Aggregate multiple signatures into one
    ///
    /// The aggregated signature can be verified against the aggregated public key.
    pub fn aggregate(sigs: &[BlsSignature]) -> Result<Self, CryptoError> {
        if sigs.is_empty() {
            return Err(CryptoError::InvalidInput("empty signature list".into()));
        }
        let refs: Vec<&Signature> = sigs.iter().map(|s| &s.0).collect();
        AggregateSignature::aggregate(&refs, true)
            .map(|asig| BlsSignature(asig.to_signature()))
            .map_err(|_| CryptoError::AggregationFailed)
    }

    /// Verify one message signed by every key in `keys`.
    ///
    /// Keys must already be validated (see [`BlsPublicKey::from_bytes`]); an
    /// empty key set never verifies.
    pub fn fast_aggregate_verify(&self, message: &[u8], keys: &[BlsPublicKey]) -> bool {
        if keys.is_empty() {
            return false;
        }
        let refs: Vec<&PublicKey> = keys.iter().map(|k| &k.0).collect();
        self.0.fast_aggregate_verify(true, message, BLS_DST, &refs) == BLST_ERROR::BLST_SUCCESS
    }
}
