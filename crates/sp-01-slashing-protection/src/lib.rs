//! # sp-01-slashing-protection
//!
//! The safety oracle: a persistent record, per validator identity, of the
//! highest attestation and block proposal ever authorized.
//!
//! ## Rules
//!
//! | Duty | Accepted when (against highest `H`) |
//! |------|--------------------------------------|
//! | Attestation | no `H`, or `target > H.target` and `source >= H.source` |
//! | Proposal | no `H`, or `slot > H.slot` |
//!
//! Identical repeats are refused.
//!
//! ## Guarantees
//!
//! - **Atomic per identity**: check and record happen under the identity's own
//!   lock; other identities proceed in parallel
//! - **Persist before success**: `Ok` is returned only after the store has
//!   durably accepted the new record
//! - **Fail closed**: unknown identities, refusals and store failures leave
//!   the record untouched
//!
//! ## Example
//!
//! ```rust,ignore
//! use sp_01_slashing_protection::{
//!     AttestationVote, FileSlashingStore, SlashingProtectionApi, SlashingProtectionLedger,
//! };
//!
//! let ledger = SlashingProtectionLedger::new(FileSlashingStore::open("/data/slashing")?);
//! ledger.initialize(&identity)?;
//! ledger.authorize_attestation(&identity, AttestationVote::new(10, 20))?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ledger;
pub mod ports;

pub use adapters::{FileSlashingStore, InMemorySlashingStore};
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbConfig, RocksDbSlashingStore};
pub use domain::errors::ProtectionResult;
pub use domain::{AttestationVote, ProposalVote, ProtectionError, SlashingRecord};
pub use ledger::SlashingProtectionLedger;
pub use ports::inbound::SlashingProtectionApi;
pub use ports::outbound::{SlashingStore, StoreError};
