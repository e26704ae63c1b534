//! A validator's secret key share.

use shared_crypto::{BlsPublicKey, BlsSecretKey, BlsSignature};
use shared_types::{Root, ValidatorPubKey};
use std::fmt;

/// Identity plus secret. Immutable once created; the secret is wiped on drop
/// and never leaves the store in serialized form.
pub struct ValidatorShare {
    identity: ValidatorPubKey,
    secret: BlsSecretKey,
}

impl ValidatorShare {
    pub fn new(secret: BlsSecretKey) -> Self {
        let identity = ValidatorPubKey::new(secret.public_key().to_bytes());
        Self { identity, secret }
    }

    pub fn identity(&self) -> &ValidatorPubKey {
        &self.identity
    }

    pub fn sign(&self, signing_root: &Root) -> BlsSignature {
        self.secret.sign(signing_root)
    }

    /// Constant-time comparison of secrets.
    pub fn same_secret_as(&self, other: &ValidatorShare) -> bool {
        self.secret.ct_eq(&other.secret)
    }

    pub fn public_key(&self) -> BlsPublicKey {
        self.secret.public_key()
    }
}

impl fmt::Debug for ValidatorShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorShare")
            .field("identity", &self.identity)
            .field("secret", &"<redacted>")
            .finish()
    }
}
