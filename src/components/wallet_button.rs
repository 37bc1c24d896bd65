use dioxus::prelude::*;
use futures::StreamExt;

use crate::wallet::{alert_missing_wallet, WalletCapability};
use crate::SessionState;

#[derive(Clone)]
enum WalletAction {
    Connect,
}

#[component]
pub fn WalletButton() -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let capability = use_context::<Option<WalletCapability>>();

    // Use coroutine for lifecycle-safe async operations
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        let capability = capability.clone();
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect => connect(capability.as_ref(), session).await,
                }
            }
        }
    });

    let connect_wallet = move |_| {
        wallet_coro.send(WalletAction::Connect);
    };

    let disconnect_wallet = move |_| {
        session.write().wallet_address.clear();
    };

    let session_read = session.read();

    if session_read.wallet_connected() {
        let address = session_read.wallet_address.clone();
        let short_address = if address.len() > 8 {
            format!("{}...{}", &address[..4], &address[address.len() - 4..])
        } else {
            address.clone()
        };

        rsx! {
            div { class: "flex items-center space-x-2",
                span { class: "text-sm text-gray-400 font-mono", "{short_address}" }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: disconnect_wallet,
                    "Disconnect"
                }
            }
        }
    } else {
        rsx! {
            button {
                class: "btn btn-primary",
                disabled: session_read.connecting,
                onclick: connect_wallet,
                if session_read.connecting { "Connecting..." } else { "Connect Wallet" }
            }
        }
    }
}

async fn connect(capability: Option<&WalletCapability>, mut session: Signal<SessionState>) {
    let Some(capability) = capability else {
        alert_missing_wallet();
        return;
    };

    // At most one account request in flight at a time.
    if session.read().connecting {
        return;
    }
    session.write().connecting = true;

    match capability.request_accounts().await {
        Ok(accounts) if !accounts.is_empty() => {
            tracing::info!("Connected {}", accounts[0]);
            session.write().wallet_address = accounts[0].clone();
        }
        Ok(_) => {
            tracing::error!("Wallet returned no accounts");
        }
        Err(e) => {
            tracing::error!("Wallet connection failed: {}", e);
        }
    }

    session.write().connecting = false;
}
