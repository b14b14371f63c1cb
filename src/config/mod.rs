//! Configuration management for Wizmeta
//!
//! Loads from YAML files + environment variables via .env

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::types::OwnerPolicy;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub chain: ChainConfig,
    pub collectibles: CollectiblesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Ethereum network id (1 mainnet, 4 rinkeby, 50 local launch-kit)
    pub network_id: u64,
    /// JSON-RPC endpoint of the node
    pub rpc_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectiblesConfig {
    /// Active source selector (opensea | mocked | cheezy)
    pub source: String,
    /// Marketplace requests per second
    pub rps: usize,
    /// Marketplace API key; rides as an empty header when unset
    pub api_key: String,
    /// current_owner derivation on the per-user path
    pub owner_policy: OwnerPolicy,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Chain defaults
            .set_default("chain.network_id", 1)?
            .set_default("chain.rpc_url", "http://localhost:8545")?
            // Collectibles defaults
            .set_default("collectibles.source", "cheezy")?
            .set_default("collectibles.rps", 5)?
            .set_default("collectibles.api_key", "")?
            .set_default("collectibles.owner_policy", "chain_stats")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (WIZMETA_*)
            .add_source(Environment::with_prefix("WIZMETA").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(app_config)
    }

    /// Generate a digest of the config (without secrets) for logging
    pub fn digest(&self) -> String {
        format!(
            "network={} source={} rps={} owner_policy={:?}",
            self.chain.network_id,
            self.collectibles.source,
            self.collectibles.rps,
            self.collectibles.owner_policy
        )
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_policy_deserializes_from_snake_case() {
        let policy: OwnerPolicy = serde_json::from_str("\"chain_stats\"").unwrap();
        assert_eq!(policy, OwnerPolicy::ChainStats);
        let policy: OwnerPolicy = serde_json::from_str("\"caller_address\"").unwrap();
        assert_eq!(policy, OwnerPolicy::CallerAddress);
        assert!(serde_json::from_str::<OwnerPolicy>("\"somebody\"").is_err());
    }
}
