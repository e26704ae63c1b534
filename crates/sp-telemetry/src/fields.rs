//! Canonical log field names and display helpers.
//!
//! Dashboards key on these names, so events about the same thing use the
//! same field whichever crate emits them. `tracing` field names must be
//! literals, which is why the macros below spell them out; the constants
//! document the set.

use std::fmt;

pub const FIELD_PUB_KEY: &str = "pubKey";
pub const FIELD_DUTY: &str = "duty";
pub const FIELD_SIGNING_ROOT: &str = "signingRoot";
pub const FIELD_FINGERPRINT: &str = "fingerprint";
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_SIGNERS: &str = "signers";

/// Lowercase hex rendering of a byte slice, computed only when the event is
/// actually recorded.
#[derive(Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// First `n` bytes in hex followed by `..`; full value when shorter.
pub struct ShortHex<'a>(pub &'a [u8], pub usize);

impl fmt::Display for ShortHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= self.1 {
            return fmt::Display::fmt(&Hex(self.0), f);
        }
        write!(f, "{}..", hex::encode(&self.0[..self.1]))
    }
}

/// Structured event tagged with the emitting component.
#[macro_export]
macro_rules! log_event {
    ($level:ident, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Event about one validator's duty, with `pubKey` and `duty` fields.
#[macro_export]
macro_rules! log_signing_event {
    ($level:ident, $msg:expr, $pub_key:expr, $duty:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = "signer",
            "pubKey" = %$pub_key,
            duty = %$duty,
            $($($field)*,)?
            $msg
        )
    };
}

/// Event about one quorum verification, with a `fingerprint` field.
#[macro_export]
macro_rules! log_verification_event {
    ($level:ident, $msg:expr, $fingerprint:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = "quorum-verifier",
            fingerprint = %$fingerprint,
            $($($field)*,)?
            $msg
        )
    };
}
