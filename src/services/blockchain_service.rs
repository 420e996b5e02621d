use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;

use crate::{errors::ConnectorError, models::resource::AccountResource};

/// Read-only access to on-chain account resources.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn get_account_resources(
        &self,
        address: &str,
    ) -> Result<Vec<AccountResource>, ConnectorError>;
}

#[derive(Clone, Debug)]
pub struct AptosClient {
    node_url: String,
    http: reqwest::Client,
}

impl AptosClient {
    /// Create a client for a fullnode REST endpoint, e.g.
    /// `https://fullnode.devnet.aptoslabs.com/v1`.
    pub fn new(node_url: impl Into<String>) -> Result<Self, ConnectorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ConnectorError::NetworkError(e.to_string()))?;
        Ok(Self {
            node_url: node_url.into(),
            http,
        })
    }

    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    fn resources_url(&self, address: &str) -> String {
        format!(
            "{}/accounts/{}/resources",
            self.node_url.trim_end_matches('/'),
            address
        )
    }
}

#[async_trait]
impl ResourceClient for AptosClient {
    async fn get_account_resources(
        &self,
        address: &str,
    ) -> Result<Vec<AccountResource>, ConnectorError> {
        let response = self
            .http
            .get(self.resources_url(address))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ConnectorError::NetworkError(e.to_string()))?;

        check_success(response)
            .await?
            .json::<Vec<AccountResource>>()
            .await
            .map_err(|e| ConnectorError::ParseError(e.to_string()))
    }
}

/// Turns a non-2xx response into an error carrying the body text.
pub async fn check_success(response: Response) -> Result<Response, ConnectorError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ConnectorError::NotSuccessResponse {
            status: status.as_u16(),
            body: response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response text".to_string()),
        });
    }
    Ok(response)
}
