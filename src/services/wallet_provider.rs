use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::ConnectorError;

use super::blockchain_service::check_success;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ConnectResponse {
    pub address: String,
}

/// Account-connection capability offered by the host, e.g. a browser
/// wallet extension.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn connect(&self) -> Result<ConnectResponse, ConnectorError>;

    async fn disconnect(&self) -> Result<(), ConnectorError>;
}

/// Provider reached through a wallet bridge speaking plain HTTP:
/// `POST {bridge}/connect` answers `{"address": "0x..."}`,
/// `POST {bridge}/disconnect` answers any 2xx.
#[derive(Clone, Debug)]
pub struct HttpWalletProvider {
    bridge_url: String,
    http: reqwest::Client,
}

impl HttpWalletProvider {
    pub fn new(bridge_url: impl Into<String>) -> Result<Self, ConnectorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ConnectorError::ProviderError(e.to_string()))?;
        Ok(Self {
            bridge_url: bridge_url.into(),
            http,
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{}", self.bridge_url.trim_end_matches('/'), method)
    }
}

#[async_trait]
impl WalletProvider for HttpWalletProvider {
    async fn connect(&self) -> Result<ConnectResponse, ConnectorError> {
        let response = self
            .http
            .post(self.endpoint("connect"))
            .send()
            .await
            .map_err(|e| ConnectorError::ProviderError(e.to_string()))?;

        check_success(response)
            .await?
            .json::<ConnectResponse>()
            .await
            .map_err(|e| ConnectorError::ParseError(e.to_string()))
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        let response = self
            .http
            .post(self.endpoint("disconnect"))
            .send()
            .await
            .map_err(|e| ConnectorError::ProviderError(e.to_string()))?;
        check_success(response).await?;
        Ok(())
    }
}
