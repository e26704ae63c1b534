//! # sp-02-key-manager
//!
//! Key share custody and the slashing-gated signing path.
//!
//! ## Architecture
//!
//! ```text
//! add_share ──► KeyShareStore ◄── lookup
//!      │
//!      └──► SlashingProtectionLedger.initialize
//!
//! sign_beacon_object ──► signing root ──► ledger (attester/proposer) ──► key ──► BLS sign
//! sign_root          ──► protocol root ───────────────────────────────► key ──► BLS sign
//! ```
//!
//! | Component | Role |
//! |-----------|------|
//! | `KeyShareStore` | identity to secret share, concurrent reads |
//! | `SigningService` | the only owner of the store and the ledger |
//! | `domain::signing_root` | payload validation and domain-separated roots |
//!
//! ## Example
//!
//! ```rust,ignore
//! use sp_02_key_manager::{KeyManager, KeyManagerConfig, SigningService};
//!
//! let signer = SigningService::open(KeyManagerConfig::from_env())?;
//! let identity = signer.add_share(&secret_bytes)?;
//! let (root, signature) =
//!     signer.sign_beacon_object(&object, &domain, &identity, DutyType::Attester)?;
//! ```

pub mod config;
pub mod domain;
pub mod key_store;
pub mod metrics;
pub mod ports;
pub mod service;

pub use config::KeyManagerConfig;
pub use domain::signing_root::{beacon_signing_root, protocol_signing_root};
pub use domain::{SignerError, SignerResult, ValidatorShare};
pub use key_store::{Insertion, KeyShareStore};
pub use ports::{FixedTimeSource, KeyManager, SystemTimeSource, TimeSource};
pub use service::SigningService;
