//! Domain layer: shares, errors and signing-root derivation.

pub mod errors;
pub mod share;
pub mod signing_root;

pub use errors::{SignerError, SignerResult};
pub use share::ValidatorShare;
