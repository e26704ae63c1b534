//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or full directive
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Network identifier (mainnet, local-testnet, test-network)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "validator-signer".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            network: "mainnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SP_SERVICE_NAME`: Service name (default: validator-signer)
    /// - `SP_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `SP_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `SP_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    /// - `SP_NETWORK`: Network name (default: mainnet)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("SP_SERVICE_NAME")
                .unwrap_or_else(|_| "validator-signer".to_string()),

            log_level: env::var("SP_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("SP_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("SP_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),

            network: env::var("SP_NETWORK").unwrap_or_else(|_| "mainnet".to_string()),
        }
    }

    /// Quiet configuration for tests: warnings only, no JSON.
    pub fn for_testing() -> Self {
        Self {
            service_name: "validator-signer-test".to_string(),
            log_level: "warn".to_string(),
            console_output: true,
            json_logs: false,
            network: "test-network".to_string(),
        }
    }
}
