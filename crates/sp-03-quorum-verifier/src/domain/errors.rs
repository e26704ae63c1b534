//! # Quorum Errors
//!
//! Every failed verification surfaces as `InvalidQuorumSignature`; the
//! attached reason is for logs only. Errors are `Clone` because negative
//! outcomes are cached and replayed.

use shared_types::OperatorId;
use std::fmt;
use thiserror::Error;

/// Why a quorum signature was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuorumFailure {
    /// No signers after canonicalization
    EmptySignerSet,
    /// Signature bytes are not a valid compressed G2 point
    MalformedSignature,
    /// A signer's key is not a valid compressed G1 point
    MalformedPublicKey { committee_index: OperatorId },
    /// Pairing check rejected the aggregate
    PairingFailed,
}

impl fmt::Display for QuorumFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuorumFailure::EmptySignerSet => f.write_str("empty signer set"),
            QuorumFailure::MalformedSignature => f.write_str("malformed signature"),
            QuorumFailure::MalformedPublicKey { committee_index } => {
                write!(f, "malformed public key for committee member {}", committee_index)
            }
            QuorumFailure::PairingFailed => f.write_str("pairing check failed"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuorumError {
    #[error("invalid quorum signature: {0}")]
    InvalidQuorumSignature(QuorumFailure),
}

impl QuorumError {
    pub fn failure(&self) -> QuorumFailure {
        match self {
            QuorumError::InvalidQuorumSignature(failure) => *failure,
        }
    }
}

impl From<QuorumFailure> for QuorumError {
    fn from(failure: QuorumFailure) -> Self {
        QuorumError::InvalidQuorumSignature(failure)
    }
}

pub type QuorumResult<T> = Result<T, QuorumError>;
