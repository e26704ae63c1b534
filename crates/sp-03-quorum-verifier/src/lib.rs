//! # sp-03-quorum-verifier
//!
//! Verifies that a signature is the aggregate of a committee's share
//! signatures over one signing root, remembering outcomes so repeated
//! checks of the same artifact skip the pairing.
//!
//! ## Cache correctness
//!
//! | Property | How |
//! |----------|-----|
//! | No false positives | the fingerprint covers root, every signer and the exact signature bytes |
//! | Order independence | signers are canonicalized before fingerprinting |
//! | Bounded memory | fixed-capacity LRU shards, optional TTL |
//! | No contention on crypto | pairing runs outside every shard lock |
//!
//! ## Example
//!
//! ```rust,ignore
//! use sp_03_quorum_verifier::{QuorumVerification, QuorumVerifier, Signer, VerifierConfig};
//!
//! let verifier = QuorumVerifier::new(VerifierConfig::from_env());
//! verifier.verify_by_committee(&signature, &signing_root, &[
//!     Signer::new(1, share_key_1),
//!     Signer::new(2, share_key_2),
//! ])?;
//! ```

pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod verifier;

pub use config::VerifierConfig;
pub use domain::{
    canonicalize, Fingerprint, QuorumError, QuorumFailure, QuorumResult, Signer,
    VerificationCache,
};
pub use ports::QuorumVerification;
pub use verifier::{QuorumRequest, QuorumVerifier, VerifierStats};
