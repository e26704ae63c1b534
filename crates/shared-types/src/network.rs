//! # Networks and the Beacon Clock
//!
//! Presets binding a network tag to its beacon chain parameters. The signer
//! never consults the clock itself; callers use it to derive protection floors
//! and duty timing.

use crate::domain::{compute_domain, Domain, DomainType};
use crate::errors::TypesError;
use crate::primitives::{Epoch, Root, Slot};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Slot/epoch arithmetic for a beacon chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconClock {
    /// Unix seconds of slot 0
    pub genesis_time: u64,
    pub seconds_per_slot: u64,
    pub slots_per_epoch: u64,
}

impl BeaconClock {
    /// Slot at a unix timestamp. Times before genesis map to slot 0.
    pub fn slot_at(&self, unix_secs: u64) -> Slot {
        if self.seconds_per_slot == 0 {
            return 0;
        }
        unix_secs.saturating_sub(self.genesis_time) / self.seconds_per_slot
    }

    /// Slot at the local wall-clock time.
    pub fn estimated_current_slot(&self) -> Slot {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.slot_at(now)
    }

    pub fn estimated_current_epoch(&self) -> Epoch {
        self.epoch_at_slot(self.estimated_current_slot())
    }

    pub fn epoch_at_slot(&self, slot: Slot) -> Epoch {
        if self.slots_per_epoch == 0 {
            return 0;
        }
        slot / self.slots_per_epoch
    }

    pub fn first_slot_of_epoch(&self, epoch: Epoch) -> Slot {
        epoch.saturating_mul(self.slots_per_epoch)
    }
}

/// Parameters of one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    /// Tag mixed into protocol signature domains
    pub domain_type: DomainType,
    pub genesis_epoch: Epoch,
    pub genesis_fork_version: [u8; 4],
    pub genesis_validators_root: Root,
    pub clock: BeaconClock,
}

const MAINNET_GENESIS_VALIDATORS_ROOT: Root = [
    0x4b, 0x36, 0x3d, 0xb9, 0x4e, 0x28, 0x61, 0x20, 0xd7, 0x6e, 0xb9, 0x05, 0x34, 0x0f, 0xdd, 0x4e,
    0x54, 0xbf, 0xe9, 0xf0, 0x6b, 0xf3, 0x3f, 0xf6, 0xcf, 0x5a, 0xd2, 0x7f, 0x51, 0x1b, 0xfe, 0x95,
];

const PRATER_GENESIS_VALIDATORS_ROOT: Root = [
    0x04, 0x3d, 0xb0, 0xd9, 0xa8, 0x38, 0x13, 0x55, 0x1e, 0xe2, 0xf3, 0x34, 0x50, 0xd2, 0x37, 0x97,
    0x75, 0x7d, 0x43, 0x09, 0x11, 0xa9, 0x32, 0x05, 0x30, 0xad, 0x8a, 0x0e, 0xab, 0xc4, 0x3e, 0xfb,
];

impl NetworkConfig {
    pub fn mainnet() -> Self {
        Self {
            name: "mainnet".to_string(),
            domain_type: DomainType([0x00, 0x00, 0x00, 0x01]),
            genesis_epoch: 1,
            genesis_fork_version: [0x00, 0x00, 0x00, 0x00],
            genesis_validators_root: MAINNET_GENESIS_VALIDATORS_ROOT,
            clock: BeaconClock {
                genesis_time: 1_606_824_023,
                seconds_per_slot: 12,
                slots_per_epoch: 32,
            },
        }
    }

    /// Local network running against the Prater beacon chain.
    pub fn local_testnet() -> Self {
        Self {
            name: "local-testnet".to_string(),
            domain_type: DomainType([0x00, 0x00, 0x04, 0x01]),
            genesis_epoch: 1,
            genesis_fork_version: [0x00, 0x00, 0x10, 0x20],
            genesis_validators_root: PRATER_GENESIS_VALIDATORS_ROOT,
            clock: BeaconClock {
                genesis_time: 1_616_508_000,
                seconds_per_slot: 12,
                slots_per_epoch: 32,
            },
        }
    }

    /// Deterministic network for tests: genesis at unix 0, zero validators root.
    pub fn test_network() -> Self {
        Self {
            name: "test-network".to_string(),
            domain_type: DomainType([0x00, 0x00, 0x00, 0x02]),
            genesis_epoch: 0,
            genesis_fork_version: [0x00, 0x00, 0x00, 0x00],
            genesis_validators_root: [0u8; 32],
            clock: BeaconClock {
                genesis_time: 0,
                seconds_per_slot: 12,
                slots_per_epoch: 32,
            },
        }
    }

    /// Resolve a preset by name.
    pub fn by_name(name: &str) -> Result<Self, TypesError> {
        match name {
            "mainnet" => Ok(Self::mainnet()),
            "local-testnet" | "local-network" => Ok(Self::local_testnet()),
            "test-network" => Ok(Self::test_network()),
            other => Err(TypesError::UnknownNetwork(other.to_string())),
        }
    }

    /// Beacon domain for a duty domain type at genesis fork.
    pub fn beacon_domain(&self, domain_type: [u8; 4]) -> Domain {
        compute_domain(
            domain_type,
            self.genesis_fork_version,
            &self.genesis_validators_root,
        )
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}
