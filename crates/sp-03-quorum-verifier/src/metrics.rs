//! # Verifier Metrics
//!
//! Prometheus counters mirroring the always-on stats snapshot.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! sp-03-quorum-verifier = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `quorum_verifications_total` - Verification calls, by cache result (hit, miss)
//! - `quorum_verification_failures_total` - Calls that returned an invalid quorum signature
//! - `quorum_verification_latency_seconds` - Time spent in pairing checks

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Verification calls, labeled by cache result
    pub static ref VERIFICATIONS: IntCounterVec = register_int_counter_vec!(
        "quorum_verifications_total",
        "Total number of quorum verification calls",
        &["cache"]
    )
    .expect("Failed to create VERIFICATIONS metric");

    /// Calls that returned an invalid quorum signature
    pub static ref FAILURES: IntCounter = register_int_counter!(
        "quorum_verification_failures_total",
        "Total number of rejected quorum signatures"
    )
    .expect("Failed to create FAILURES metric");

    /// Pairing check latency
    pub static ref PAIRING_LATENCY: Histogram = register_histogram!(
        "quorum_verification_latency_seconds",
        "Time taken by an uncached aggregate verification in seconds",
        vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05]
    )
    .expect("Failed to create PAIRING_LATENCY metric");
}

/// Record a cache hit
#[cfg(feature = "metrics")]
pub fn record_hit() {
    VERIFICATIONS.with_label_values(&["hit"]).inc();
}

/// Record a cache miss
#[cfg(feature = "metrics")]
pub fn record_miss() {
    VERIFICATIONS.with_label_values(&["miss"]).inc();
}

/// Record a rejected quorum signature
#[cfg(feature = "metrics")]
pub fn record_failure() {
    FAILURES.inc();
}

/// Record pairing latency
#[cfg(feature = "metrics")]
pub fn record_pairing_latency(seconds: f64) {
    PAIRING_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_hit() {}

#[cfg(not(feature = "metrics"))]
pub fn record_miss() {}

#[cfg(not(feature = "metrics"))]
pub fn record_failure() {}

#[cfg(not(feature = "metrics"))]
pub fn record_pairing_latency(_seconds: f64) {}
