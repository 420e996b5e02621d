use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConnectorError;

pub const APTOS_COIN_STORE: &str = "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>";

/// Base units per displayed token.
pub const BASE_UNITS_PER_TOKEN: f64 = 1_000_000.0;

/// A typed record stored under an account, as listed by the fullnode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub data: Value,
}

impl AccountResource {
    /// Reads `data.coin.value`. The node encodes u64 amounts as decimal
    /// strings, plain JSON numbers are accepted as well.
    pub fn coin_value(&self) -> Result<u64, ConnectorError> {
        let value = self
            .data
            .get("coin")
            .and_then(|coin| coin.get("value"))
            .ok_or_else(|| {
                ConnectorError::MalformedResource(format!(
                    "{} has no coin.value",
                    self.resource_type
                ))
            })?;

        match value {
            Value::String(s) => s.parse::<u64>().map_err(|e| {
                ConnectorError::MalformedResource(format!("coin.value {:?}: {}", s, e))
            }),
            Value::Number(n) => n.as_u64().ok_or_else(|| {
                ConnectorError::MalformedResource(format!("coin.value {} is not a u64", n))
            }),
            other => Err(ConnectorError::MalformedResource(format!(
                "coin.value has unexpected type: {}",
                other
            ))),
        }
    }
}

/// Locates the AptosCoin store and returns its balance in display units.
/// An account without the store holds nothing, so that is `Ok(0.0)`.
pub fn coin_balance(resources: &[AccountResource]) -> Result<f64, ConnectorError> {
    match resources
        .iter()
        .find(|r| r.resource_type == APTOS_COIN_STORE)
    {
        Some(resource) => Ok(to_display_units(resource.coin_value()?)),
        None => Ok(0.0),
    }
}

pub fn to_display_units(base_units: u64) -> f64 {
    base_units as f64 / BASE_UNITS_PER_TOKEN
}
