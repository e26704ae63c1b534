//! # Signer Errors
//!
//! Callers must be able to tell a refusal that must never be retried
//! (slashing) from an infrastructure fault that may be retried.

use shared_crypto::CryptoError;
use shared_types::ValidatorPubKey;
use sp_01_slashing_protection::ProtectionError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("unknown identity {identity}")]
    UnknownIdentity { identity: ValidatorPubKey },

    /// A different secret is already registered under this identity
    #[error("identity {identity} already registered with a different key")]
    AlreadyRegistered { identity: ValidatorPubKey },

    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Message names the violated historical vote
    #[error("{reason}")]
    SlashableAttestation { reason: String },

    #[error("{reason}")]
    SlashableProposal { reason: String },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("signing failure: {0}")]
    SigningFailure(String),

    /// The protection record could not be durably updated; nothing was signed
    #[error("persistence failure: {0}")]
    PersistenceFailure(String),
}

impl SignerError {
    /// Signing would be slashable. Never retry with the same or a weaker vote.
    pub fn is_slashing_violation(&self) -> bool {
        matches!(
            self,
            SignerError::SlashableAttestation { .. } | SignerError::SlashableProposal { .. }
        )
    }

    /// Infrastructure faults that may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SignerError::PersistenceFailure(_) | SignerError::SigningFailure(_)
        )
    }
}

impl From<ProtectionError> for SignerError {
    fn from(e: ProtectionError) -> Self {
        match e {
            ProtectionError::UnknownIdentity { identity } => SignerError::UnknownIdentity { identity },
            ProtectionError::SlashableAttestation { .. } => SignerError::SlashableAttestation {
                reason: e.to_string(),
            },
            ProtectionError::SlashableProposal { .. } => SignerError::SlashableProposal {
                reason: e.to_string(),
            },
            ProtectionError::MalformedVote { .. } => SignerError::InvalidPayload(e.to_string()),
            ProtectionError::Persistence(inner) => SignerError::PersistenceFailure(inner.to_string()),
        }
    }
}

impl From<CryptoError> for SignerError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidLength { .. } | CryptoError::InvalidPrivateKey => {
                SignerError::InvalidKeyMaterial(e.to_string())
            }
            other => SignerError::SigningFailure(other.to_string()),
        }
    }
}

pub type SignerResult<T> = Result<T, SignerError>;
