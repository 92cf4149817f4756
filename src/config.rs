//! SDK Configuration
//!
//! Per-chain deployment constants (vault factories and their init-code
//! hashes), the root chain id and the log level. Loaded from JSON, either
//! inline, from a file, or from the file named by `HERMES_SDK_CONFIG`.
//!
//! ```json
//! {
//!   "root_chain_id": 42161,
//!   "log_level": "info",
//!   "deployments": [
//!     {
//!       "chain_id": 42161,
//!       "vault_factory": "0x...",
//!       "vault_init_code_hash": "0x..."
//!     }
//!   ]
//! }
//! ```

use crate::error::{SdkError, SdkResult};
use crate::types::{Address, Chain, ChainId, InitCodeHash};
use crate::utils::logging::{self, LogLevel};
use crate::{log_error, log_info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "HERMES_SDK_CONFIG";

static SDK_CONFIG: OnceLock<SdkConfig> = OnceLock::new();

/// Vault factory deployed on one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub chain_id: ChainId,
    pub vault_factory: Address,
    pub vault_init_code_hash: InitCodeHash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Chain the global tokens live on
    pub root_chain_id: ChainId,
    pub log_level: LogLevel,
    pub deployments: Vec<Deployment>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            root_chain_id: Chain::Arbitrum.chain_id(),
            log_level: LogLevel::Warn,
            deployments: Vec::new(),
        }
    }
}

impl SdkConfig {
    pub fn from_json(json: &str) -> SdkResult<Self> {
        let config: SdkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SdkError::config_error(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Load from the file named by `HERMES_SDK_CONFIG`, or defaults if unset
    pub fn from_env() -> SdkResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> SdkResult<()> {
        let mut seen = HashSet::new();
        for deployment in &self.deployments {
            if !seen.insert(deployment.chain_id) {
                return Err(SdkError::config_error(format!(
                    "duplicate deployment for chain {}",
                    deployment.chain_id
                )));
            }
            if deployment.vault_factory.is_zero() {
                return Err(SdkError::config_error(format!(
                    "vault factory for chain {} is the zero address",
                    deployment.chain_id
                )));
            }
        }
        Ok(())
    }

    pub fn deployment(&self, chain_id: ChainId) -> Option<&Deployment> {
        self.deployments.iter().find(|d| d.chain_id == chain_id)
    }

    pub fn is_root_chain(&self, chain_id: ChainId) -> bool {
        self.root_chain_id == chain_id
    }
}

/// Install the process-wide configuration and apply its log level.
///
/// Only the first call takes effect; later calls return the installed value.
pub fn init_global_config(config: SdkConfig) -> &'static SdkConfig {
    let mut fresh = false;
    let installed = SDK_CONFIG.get_or_init(|| {
        fresh = true;
        config
    });
    logging::set_min_level(installed.log_level);
    if fresh {
        log_info!(
            "config",
            "installed configuration",
            root_chain_id = installed.root_chain_id,
            deployments = installed.deployments.len(),
        );
    }
    installed
}

/// Process-wide configuration, loaded from the environment on first use
pub fn global_config() -> SdkResult<&'static SdkConfig> {
    if let Some(config) = SDK_CONFIG.get() {
        return Ok(config);
    }
    let loaded = SdkConfig::from_env().map_err(|e| {
        log_error!("config", "failed to load configuration", error = e);
        e
    })?;
    Ok(init_global_config(loaded))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORY: &str = "0xdeadbeef00000000000000000000000000000000";

    fn sample_json(chain_ids: &[u64]) -> String {
        let deployments: Vec<String> = chain_ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"chain_id": {}, "vault_factory": "{}", "vault_init_code_hash": "0x{}"}}"#,
                    id,
                    FACTORY,
                    "11".repeat(32)
                )
            })
            .collect();
        format!(
            r#"{{"root_chain_id": 42161, "log_level": "info", "deployments": [{}]}}"#,
            deployments.join(",")
        )
    }

    #[test]
    fn test_from_json() {
        let config = SdkConfig::from_json(&sample_json(&[42161, 1])).unwrap();
        assert_eq!(config.root_chain_id, 42161);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.deployments.len(), 2);

        let deployment = config.deployment(1).unwrap();
        assert_eq!(deployment.vault_init_code_hash.0, [0x11; 32]);
        assert!(config.deployment(10).is_none());
        assert!(config.is_root_chain(42161));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = SdkConfig::from_json("{}").unwrap();
        assert_eq!(config, SdkConfig::default());
    }

    #[test]
    fn test_duplicate_chain_rejected() {
        let err = SdkConfig::from_json(&sample_json(&[1, 1])).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }

    #[test]
    fn test_bad_hash_rejected() {
        let json = format!(
            r#"{{"deployments": [{{"chain_id": 1, "vault_factory": "{}", "vault_init_code_hash": "0x12"}}]}}"#,
            FACTORY
        );
        let err = SdkConfig::from_json(&json).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::JsonError);
    }

    #[test]
    fn test_from_missing_file() {
        let err = SdkConfig::from_file("/nonexistent/hermes-sdk.json").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }
}
