//! # Consensus Messages
//!
//! Agreement-protocol messages exchanged between committee members. They are
//! signed through `SignRoot` and carry no slashing penalty.

use crate::errors::TypesError;
use crate::primitives::Root;
use crate::ssz::{byte_list_root, merkleize, u64_chunk, TreeHash};
use serde::{Deserialize, Serialize};

/// Maximum identifier length (validator public key + role tag).
pub const MAX_IDENTIFIER_LENGTH: usize = 56;

/// Round message kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    Proposal = 0,
    Prepare = 1,
    Commit = 2,
    RoundChange = 3,
}

/// A single round message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsensusMessage {
    pub msg_type: MessageType,
    pub height: u64,
    pub round: u64,
    pub identifier: Vec<u8>,
    pub root: Root,
}

impl ConsensusMessage {
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.identifier.len() > MAX_IDENTIFIER_LENGTH {
            return Err(TypesError::IdentifierTooLong {
                len: self.identifier.len(),
                max: MAX_IDENTIFIER_LENGTH,
            });
        }
        Ok(())
    }
}

impl TreeHash for ConsensusMessage {
    fn tree_hash_root(&self) -> Root {
        merkleize(&[
            u64_chunk(self.msg_type as u64),
            u64_chunk(self.height),
            u64_chunk(self.round),
            byte_list_root(&self.identifier, MAX_IDENTIFIER_LENGTH),
            self.root,
        ])
    }
}
