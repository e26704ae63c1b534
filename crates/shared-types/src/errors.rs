//! Error types for primitive parsing and payload validation.

use thiserror::Error;

/// Errors raised while constructing or validating shared types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypesError {
    /// A fixed-size byte field had the wrong length
    #[error("Invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Consensus message identifier exceeds the protocol limit
    #[error("Identifier too long: {len} bytes (max {max})")]
    IdentifierTooLong { len: usize, max: usize },

    /// Attestation source checkpoint is after its target
    #[error("Source epoch {source_epoch} is after target epoch {target_epoch}")]
    SourceAfterTarget {
        source_epoch: u64,
        target_epoch: u64,
    },

    /// Network preset name not recognised
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}
