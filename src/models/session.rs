use serde::Serialize;

/// What the widget knows about the connected account.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub wallet_address: Option<String>,
    pub token_balance: Option<f64>,
    pub copied: bool,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.wallet_address.is_some()
    }

    pub fn clear_connection(&mut self) {
        self.wallet_address = None;
        self.token_balance = None;
        self.copied = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_connection_resets_everything() {
        let mut state = SessionState {
            wallet_address: Some("0x1".into()),
            token_balance: Some(2.5),
            copied: true,
        };
        state.clear_connection();
        assert_eq!(state, SessionState::default());
    }
}
