//! Committee signers and their canonical order.

use shared_types::{OperatorId, PUBLIC_KEY_LENGTH};
use std::collections::HashSet;

/// One committee member whose share contributed to an aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signer {
    pub committee_index: OperatorId,
    pub public_key: [u8; PUBLIC_KEY_LENGTH],
}

impl Signer {
    pub fn new(committee_index: OperatorId, public_key: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self {
            committee_index,
            public_key,
        }
    }
}

/// Sort by committee index then key, and keep each public key once.
///
/// A key listed under several indices keeps its lowest index, so the same
/// share can never be counted twice in an aggregate.
pub fn canonicalize(signers: &[Signer]) -> Vec<Signer> {
    let mut sorted = signers.to_vec();
    sorted.sort_unstable();

    let mut seen = HashSet::with_capacity(sorted.len());
    sorted.retain(|signer| seen.insert(signer.public_key));
    sorted
}
