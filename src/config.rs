use std::time::Duration;

use crate::{
    errors::ConnectorError,
    models::network_config::NetworkConfig,
    services::network_config::{get_network_config, DEFAULT_NETWORK},
};

const DEFAULT_ORIGINS: &str = "http://localhost:8080,http://localhost:5173";

pub struct Config {
    pub port: u16,
    pub network: NetworkConfig,
    /// Fullnode REST endpoint, the network's own unless overridden.
    pub node_url: String,
    pub wallet_bridge_url: Option<String>,
    pub allowed_origins: Vec<String>,
    pub copied_reset: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConnectorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConnectorError> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| ConnectorError::ConfigError(format!("PORT: {}", e)))?;

        let network = get_network_config(
            &lookup("APTOS_NETWORK").unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
        )?;
        let node_url = lookup("APTOS_NODE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| network.node_url.clone());

        let wallet_bridge_url = lookup("WALLET_BRIDGE_URL").filter(|url| !url.trim().is_empty());

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let copied_reset = lookup("COPY_RESET_MS")
            .unwrap_or_else(|| "2000".to_string())
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConnectorError::ConfigError(format!("COPY_RESET_MS: {}", e)))?;

        Ok(Self {
            port,
            network,
            node_url,
            wallet_bridge_url,
            allowed_origins,
            copied_reset,
        })
    }
}
