use serde::Serialize;

use super::session::SessionState;

pub const TOKEN_SYMBOL: &str = "APT";

/// Everything the widget shows, derived from the session state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WidgetView {
    pub connected: bool,
    pub address: Option<String>,
    pub short_address: Option<String>,
    pub balance: Option<f64>,
    pub balance_display: Option<String>,
    pub copied: bool,
}

impl From<&SessionState> for WidgetView {
    fn from(state: &SessionState) -> Self {
        Self {
            connected: state.is_connected(),
            address: state.wallet_address.clone(),
            short_address: state.wallet_address.as_deref().map(shorten_address),
            balance: state.token_balance,
            balance_display: state.token_balance.map(format_balance),
            copied: state.copied,
        }
    }
}

/// `0x1234...cdef` style: first six characters, last four.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub fn format_balance(balance: f64) -> String {
    format!("{:.4} {}", balance, TOKEN_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses() {
        assert_eq!(
            shorten_address("0x8f3a91c2d4e5f60718293a4b5c6d7e8f9a0b1c2d"),
            "0x8f3a...1c2d"
        );
        assert_eq!(shorten_address("0xABC"), "0xABC");
    }

    #[test]
    fn balance_has_four_decimals() {
        assert_eq!(format_balance(5.0), "5.0000 APT");
        assert_eq!(format_balance(0.0), "0.0000 APT");
        assert_eq!(format_balance(1.234567), "1.2346 APT");
    }

    #[test]
    fn disconnected_view_is_empty() {
        let view = WidgetView::from(&SessionState::default());
        assert!(!view.connected);
        assert_eq!(view.short_address, None);
        assert_eq!(view.balance_display, None);
    }

    #[test]
    fn connected_view_without_balance_yet() {
        let state = SessionState {
            wallet_address: Some("0x8f3a91c2d4e5f60718293a4b5c6d7e8f9a0b1c2d".into()),
            token_balance: None,
            copied: false,
        };
        let view = WidgetView::from(&state);
        assert!(view.connected);
        assert_eq!(view.short_address.as_deref(), Some("0x8f3a...1c2d"));
        assert_eq!(view.balance_display, None);
    }
}
