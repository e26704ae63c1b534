//! Key manager configuration from environment variables.

use shared_types::NetworkConfig;
use std::env;
use std::path::PathBuf;

/// Configuration for the signing service.
#[derive(Debug, Clone)]
pub struct KeyManagerConfig {
    /// Network whose domain type separates protocol signatures
    pub network: NetworkConfig,

    /// Directory of the file-backed slashing protection database
    pub slashing_db_path: PathBuf,

    /// Epochs ahead of the current epoch that a bumped attestation floor sits
    pub min_attestation_protection_epochs: u64,

    /// Slots ahead of the current slot that a bumped proposal floor sits
    pub min_block_protection_slots: u64,

    /// Raise protection floors from the clock whenever a share is added
    pub bump_on_register: bool,

    /// Verify each fresh signature against the share's public key
    pub verify_after_sign: bool,
}

impl Default for KeyManagerConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::mainnet(),
            slashing_db_path: PathBuf::from("./data/slashing-protection"),
            min_attestation_protection_epochs: 0,
            min_block_protection_slots: 0,
            bump_on_register: false,
            verify_after_sign: false,
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| v.to_lowercase() == "true" || v == "1")
        .unwrap_or(default)
}

impl KeyManagerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SP_NETWORK`: Network preset (default: mainnet; unknown names fall back to mainnet)
    /// - `SP_SLASHING_DB_PATH`: Protection database directory
    /// - `SP_MIN_ATT_PROTECTION_EPOCHS`: Attestation floor distance (default: 0)
    /// - `SP_MIN_BLOCK_PROTECTION_SLOTS`: Proposal floor distance (default: 0)
    /// - `SP_BUMP_ON_REGISTER`: Bump floors when adding a share (default: false)
    /// - `SP_VERIFY_AFTER_SIGN`: Self-check every signature (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let network = env::var("SP_NETWORK")
            .ok()
            .and_then(|name| NetworkConfig::by_name(&name).ok())
            .unwrap_or(defaults.network);

        Self {
            network,
            slashing_db_path: env::var("SP_SLASHING_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.slashing_db_path),
            min_attestation_protection_epochs: env_u64(
                "SP_MIN_ATT_PROTECTION_EPOCHS",
                defaults.min_attestation_protection_epochs,
            ),
            min_block_protection_slots: env_u64(
                "SP_MIN_BLOCK_PROTECTION_SLOTS",
                defaults.min_block_protection_slots,
            ),
            bump_on_register: env_flag("SP_BUMP_ON_REGISTER", defaults.bump_on_register),
            verify_after_sign: env_flag("SP_VERIFY_AFTER_SIGN", defaults.verify_after_sign),
        }
    }

    /// Test network with self-verification on.
    pub fn for_testing() -> Self {
        Self {
            network: NetworkConfig::test_network(),
            slashing_db_path: env::temp_dir().join("sp-slashing-test"),
            verify_after_sign: true,
            ..Default::default()
        }
    }
}
