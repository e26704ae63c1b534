//! Driven ports (Outbound SPI)

use shared_types::{BeaconClock, Slot};

/// Time source for protection floors
pub trait TimeSource: Send + Sync {
    /// Get current unix timestamp in seconds
    fn now(&self) -> u64;

    /// Current slot on the given clock
    fn current_slot(&self, clock: &BeaconClock) -> Slot {
        clock.slot_at(self.now())
    }
}

/// Default time source using system time
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Frozen time, for tests and replay
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub u64);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> u64 {
        self.0
    }
}
