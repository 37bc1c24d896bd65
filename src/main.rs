#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;
mod wallet;

use dioxus::prelude::*;
use route::Route;
use wallet::WalletCapability;

// Configuration
pub const CHECKER_BASE_URL: &str = "https://nftlink-mzlvbqxo4a-uc.a.run.app";
pub const MINT_BASE_URL: &str = "https://nftlink-mzlvbqxo4a-uc.a.run.app";

/// Opaque token handed out by the mock credential exchange.
pub const MOCK_SESSION_TOKEN: &str = "2342f2f1d131rf12";

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers. The wallet extension is probed exactly once
    // here; everything downstream consumes the detected capability.
    use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(WalletCapability::detect);

    rsx! {
        Router::<Route> {}
    }
}

// Global state types

/// The session. Empty strings mean unauthenticated / no wallet. Owned by
/// the provider at the App root; views read and mutate it only through the
/// session hooks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: String,
    pub wallet_address: String,
    /// Guard so at most one wallet account request is in flight.
    pub connecting: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn wallet_connected(&self) -> bool {
        !self.wallet_address.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_unauthenticated() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert!(!session.wallet_connected());
        assert!(!session.connecting);
    }

    #[test]
    fn token_drives_authentication() {
        let mut session = SessionState::default();
        session.token = MOCK_SESSION_TOKEN.to_string();
        assert!(session.is_authenticated());

        session.token.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn address_drives_wallet_connection() {
        let mut session = SessionState::default();
        session.wallet_address = "0xCAFE".to_string();
        assert!(session.wallet_connected());
    }
}
