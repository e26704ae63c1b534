//! # Signer Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Deterministic keys, payloads and services
//! ├── benchmarks/       # Criterion groups, registered from benches/
//! └── integration/      # Cross-crate flows
//!     ├── signing_flows.rs
//!     ├── persistence.rs
//!     ├── concurrency.rs
//!     ├── quorum.rs
//!     └── properties.rs # proptest
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sp-tests
//! cargo test -p sp-tests integration::concurrency
//! cargo bench -p sp-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
