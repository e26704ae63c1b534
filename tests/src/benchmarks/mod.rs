//! # Signer Benchmarks
//!
//! Criterion groups, registered from `benches/signer_benchmarks.rs`.

pub mod signing;
pub mod verification;
