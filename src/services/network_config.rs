use crate::{errors::ConnectorError, models::network_config::NetworkConfig};

pub const DEFAULT_NETWORK: &str = "devnet";

/// Get network configuration based on the network name
pub fn get_network_config(name: &str) -> Result<NetworkConfig, ConnectorError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mainnet" => Ok(NetworkConfig {
            name: "Aptos Mainnet".to_string(),
            node_url: "https://fullnode.mainnet.aptoslabs.com/v1".to_string(),
            symbol: "APT".to_string(),
            block_explorer: "https://explorer.aptoslabs.com/?network=mainnet".to_string(),
        }),
        "testnet" => Ok(NetworkConfig {
            name: "Aptos Testnet".to_string(),
            node_url: "https://fullnode.testnet.aptoslabs.com/v1".to_string(),
            symbol: "APT".to_string(),
            block_explorer: "https://explorer.aptoslabs.com/?network=testnet".to_string(),
        }),
        "devnet" => Ok(NetworkConfig {
            name: "Aptos Devnet".to_string(),
            node_url: "https://fullnode.devnet.aptoslabs.com/v1".to_string(),
            symbol: "APT".to_string(),
            block_explorer: "https://explorer.aptoslabs.com/?network=devnet".to_string(),
        }),
        _ => Err(ConnectorError::UnsupportedNetworkError(name.to_string())),
    }
}
