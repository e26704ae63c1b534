//! # Integration Tests
//!
//! Flows that cross crate boundaries: signer + ledger + store, and signer +
//! quorum verifier.

pub mod concurrency;
pub mod persistence;
pub mod properties;
pub mod quorum;
pub mod signing_flows;
