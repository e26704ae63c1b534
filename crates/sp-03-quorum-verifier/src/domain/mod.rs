//! Domain layer: signers, fingerprints, the result cache and errors.

pub mod cache;
pub mod errors;
pub mod fingerprint;
pub mod signer;

pub use cache::VerificationCache;
pub use errors::{QuorumError, QuorumFailure, QuorumResult};
pub use fingerprint::Fingerprint;
pub use signer::{canonicalize, Signer};
