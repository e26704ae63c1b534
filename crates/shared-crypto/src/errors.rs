//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Input had the wrong byte length
    #[error("Invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Which value was being parsed
        what: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Bytes are not a valid, non-identity G1 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Bytes are not a valid non-zero scalar
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Bytes are not a valid G2 point
    #[error("Invalid signature")]
    InvalidSignature,

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// BLS aggregation failed
    #[error("BLS aggregation failed")]
    AggregationFailed,

    /// Invalid input for cryptographic operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
