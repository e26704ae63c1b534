//! # Signer Metrics
//!
//! Prometheus counters for the signing path.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! sp-02-key-manager = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `signer_signatures_total` - Signatures released, by duty
//! - `signer_slashing_refusals_total` - Requests refused by slashing protection, by kind
//! - `signer_shares_registered` - Shares currently held

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, register_int_gauge, IntCounterVec, IntGauge};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Signatures released, labeled by duty
    pub static ref SIGNATURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "signer_signatures_total",
        "Total number of signatures released",
        &["duty"]
    )
    .expect("Failed to create SIGNATURES_TOTAL metric");

    /// Slashing refusals, labeled by kind (attestation, proposal)
    pub static ref SLASHING_REFUSALS: IntCounterVec = register_int_counter_vec!(
        "signer_slashing_refusals_total",
        "Total number of requests refused by slashing protection",
        &["kind"]
    )
    .expect("Failed to create SLASHING_REFUSALS metric");

    /// Shares currently registered
    pub static ref SHARES_REGISTERED: IntGauge = register_int_gauge!(
        "signer_shares_registered",
        "Number of key shares currently held"
    )
    .expect("Failed to create SHARES_REGISTERED metric");
}

/// Record a released signature
#[cfg(feature = "metrics")]
pub fn record_signature(duty: &str) {
    SIGNATURES_TOTAL.with_label_values(&[duty]).inc();
}

/// Record a slashing refusal
#[cfg(feature = "metrics")]
pub fn record_slashing_refusal(kind: &str) {
    SLASHING_REFUSALS.with_label_values(&[kind]).inc();
}

/// Set the number of held shares
#[cfg(feature = "metrics")]
pub fn set_shares_registered(count: usize) {
    SHARES_REGISTERED.set(count as i64);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_signature(_duty: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_slashing_refusal(_kind: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn set_shares_registered(_count: usize) {}
