use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use log::{debug, error, info, warn};

use crate::{
    errors::ConnectorError,
    models::{resource::coin_balance, session::SessionState, view::WidgetView},
};

use super::{
    blockchain_service::ResourceClient, clipboard::Clipboard, notice_service::Notifier,
    wallet_provider::WalletProvider,
};

pub const WALLET_NOT_INSTALLED: &str = "Petra Wallet is not installed!";

/// How long the copy indicator stays on.
pub const COPIED_RESET: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
struct Inner {
    state: SessionState,
    // Bumped by every connect and disconnect; responses carrying an older
    // ticket are dropped.
    generation: u64,
    copy_generation: u64,
}

impl Inner {
    fn next_ticket(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives the wallet widget: connects the account through the injected
/// provider, loads its balance and keeps the session state the view is
/// rendered from.
///
/// Every action resolves into a state update only if no newer connect or
/// disconnect started in the meantime, so overlapping clicks settle on the
/// latest one.
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
    resources: Arc<dyn ResourceClient>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    copied_reset: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl WalletConnector {
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        resources: Arc<dyn ResourceClient>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            resources,
            clipboard,
            notifier,
            copied_reset: COPIED_RESET,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn with_copied_reset(mut self, copied_reset: Duration) -> Self {
        self.copied_reset = copied_reset;
        self
    }

    pub fn session(&self) -> SessionState {
        lock(&self.inner).state.clone()
    }

    pub fn view(&self) -> WidgetView {
        WidgetView::from(&lock(&self.inner).state)
    }

    pub async fn connect(&self) {
        let Some(provider) = self.provider.clone() else {
            self.notifier.notify(WALLET_NOT_INSTALLED);
            return;
        };

        let ticket = lock(&self.inner).next_ticket();
        let address = match provider.connect().await {
            Ok(response) => response.address,
            Err(e) => {
                error!("Wallet connection failed: {}", e);
                return;
            }
        };

        {
            let mut inner = lock(&self.inner);
            if inner.generation != ticket {
                debug!("Discarding connect response for {}: superseded", address);
                return;
            }
            inner.state.wallet_address = Some(address.clone());
        }
        info!("Wallet connected: {}", address);

        self.load_balance(&address, ticket).await;
    }

    pub async fn disconnect(&self) {
        {
            let mut inner = lock(&self.inner);
            inner.next_ticket();
            // pending reset timers no longer own the indicator
            inner.copy_generation += 1;
            inner.state.clear_connection();
        }

        if let Some(provider) = &self.provider {
            if let Err(e) = provider.disconnect().await {
                error!("Wallet disconnection failed: {}", e);
            }
        }
        info!("Wallet disconnected");
    }

    /// Loads the balance of `address` into the session. The result is kept
    /// only while `address` is still the connected account.
    pub async fn fetch_balance(&self, address: &str) {
        let ticket = lock(&self.inner).generation;
        self.load_balance(address, ticket).await;
    }

    /// Reloads the balance of the connected account.
    pub async fn refresh_balance(&self) -> Result<(), ConnectorError> {
        let address = lock(&self.inner)
            .state
            .wallet_address
            .clone()
            .ok_or(ConnectorError::NotConnectedError)?;
        self.fetch_balance(&address).await;
        Ok(())
    }

    async fn load_balance(&self, address: &str, ticket: u64) {
        let balance = match self.resources.get_account_resources(address).await {
            Ok(resources) => coin_balance(&resources),
            Err(e) => Err(e),
        };
        let balance = match balance {
            Ok(balance) => balance,
            Err(e) => {
                error!("Failed to get balance for {}: {}", address, e);
                return;
            }
        };

        let mut inner = lock(&self.inner);
        if inner.generation != ticket || inner.state.wallet_address.as_deref() != Some(address) {
            debug!("Discarding balance of {}: superseded", address);
            return;
        }
        inner.state.token_balance = Some(balance);
        debug!("Balance of {} is {}", address, balance);
    }

    /// Puts the full address on the clipboard and raises the copy indicator
    /// for `copied_reset`. Needs a running tokio runtime for the reset timer.
    pub async fn copy_address(&self) {
        let (address, ticket) = {
            let inner = lock(&self.inner);
            let Some(address) = inner.state.wallet_address.clone() else {
                return;
            };
            (address, inner.generation)
        };

        if let Err(e) = self.clipboard.write_text(&address).await {
            warn!("Failed to copy address: {}", e);
            return;
        }

        let copy_ticket = {
            let mut inner = lock(&self.inner);
            if inner.generation != ticket
                || inner.state.wallet_address.as_deref() != Some(address.as_str())
            {
                debug!("Discarding copy of {}: superseded", address);
                return;
            }
            inner.copy_generation += 1;
            inner.state.copied = true;
            inner.copy_generation
        };

        let shared = Arc::clone(&self.inner);
        let delay = self.copied_reset;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut inner = lock(&shared);
            // a newer copy owns the indicator now
            if inner.copy_generation == copy_ticket {
                inner.state.copied = false;
            }
        });
    }
}
