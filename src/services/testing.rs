//! Stand-ins for the connector's capabilities.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use crate::{
    errors::ConnectorError,
    models::resource::{AccountResource, APTOS_COIN_STORE},
};

use super::{
    blockchain_service::ResourceClient,
    clipboard::Clipboard,
    notice_service::Notifier,
    wallet_provider::{ConnectResponse, WalletProvider},
};

pub fn coin_store(value: &str) -> AccountResource {
    AccountResource {
        resource_type: APTOS_COIN_STORE.to_string(),
        data: json!({ "coin": { "value": value }, "frozen": false }),
    }
}

pub struct FakeProvider {
    address: Option<String>,
    disconnect_fails: bool,
    gate: Option<Arc<Notify>>,
    disconnect_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn connecting_to(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            disconnect_fails: false,
            gate: None,
            disconnect_calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            address: None,
            ..Self::connecting_to("")
        }
    }

    pub fn failing_disconnect(mut self) -> Self {
        self.disconnect_fails = true;
        self
    }

    /// `connect` waits until the gate is notified.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone().expect("provider is not gated")
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for FakeProvider {
    async fn connect(&self) -> Result<ConnectResponse, ConnectorError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.address {
            Some(address) => Ok(ConnectResponse {
                address: address.clone(),
            }),
            None => Err(ConnectorError::ProviderError("User rejected the request".into())),
        }
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        if self.disconnect_fails {
            return Err(ConnectorError::ProviderError("extension unavailable".into()));
        }
        Ok(())
    }
}

/// Answers with a fixed resource list, or fails when none is set.
#[derive(Default)]
pub struct FakeResources {
    resources: Mutex<Option<Vec<AccountResource>>>,
    held: Mutex<Option<(Arc<Notify>, Vec<AccountResource>)>>,
    requested: Mutex<Vec<String>>,
}

impl FakeResources {
    pub fn returning(resources: Vec<AccountResource>) -> Self {
        Self {
            resources: Mutex::new(Some(resources)),
            held: Mutex::new(None),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn set_resources(&self, resources: Vec<AccountResource>) {
        *self.resources.lock().unwrap() = Some(resources);
    }

    pub fn set_failing(&self) {
        *self.resources.lock().unwrap() = None;
    }

    /// The next call waits for the returned gate, then answers with
    /// `resources`. Later calls are unaffected.
    pub fn hold_next(&self, resources: Vec<AccountResource>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.held.lock().unwrap() = Some((gate.clone(), resources));
        gate
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceClient for FakeResources {
    async fn get_account_resources(
        &self,
        address: &str,
    ) -> Result<Vec<AccountResource>, ConnectorError> {
        self.requested.lock().unwrap().push(address.to_string());
        let held = self.held.lock().unwrap().take();
        if let Some((gate, resources)) = held {
            gate.notified().await;
            return Ok(resources);
        }
        self.resources
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ConnectorError::NetworkError("connection refused".into()))
    }
}

pub struct FailingClipboard;

#[async_trait]
impl Clipboard for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ConnectorError> {
        Err(ConnectorError::ProviderError("clipboard permission denied".into()))
    }
}

/// Accepts every write, but only once the gate is notified.
#[derive(Default)]
pub struct GatedClipboard {
    gate: Arc<Notify>,
}

impl GatedClipboard {
    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone()
    }
}

#[async_trait]
impl Clipboard for GatedClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ConnectorError> {
        self.gate.notified().await;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
