use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::wallet::WalletCapability;
use crate::{SessionState, MOCK_SESSION_TOKEN};

/// Shared session handle provided at the App root.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Mock credential exchange: fixed delay, then a constant opaque token.
/// Stands in for a real auth service call.
pub async fn login(mut session: Signal<SessionState>) {
    fake_auth_delay().await;
    session.write().token = MOCK_SESSION_TOKEN.to_string();
}

pub fn logout(mut session: Signal<SessionState>) {
    session.write().token.clear();
}

/// Silently restores an already-authorized wallet account on startup.
/// `eth_accounts` never prompts, so this is safe to run unconditionally.
pub fn use_wallet_restore() {
    let mut session = use_context::<Signal<SessionState>>();
    let capability = use_context::<Option<WalletCapability>>();

    let started = use_hook(|| Rc::new(Cell::new(false)));

    use_effect(move || {
        if started.get() {
            return;
        }
        started.set(true);

        let Some(capability) = capability.clone() else {
            tracing::info!("No wallet extension injected");
            return;
        };

        spawn(async move {
            match capability.authorized_accounts().await {
                Ok(accounts) if !accounts.is_empty() => {
                    tracing::info!("Found an authorized account: {}", accounts[0]);
                    session.write().wallet_address = accounts[0].clone();
                }
                Ok(_) => {
                    tracing::info!("No authorized account found");
                }
                Err(e) => {
                    tracing::error!("Wallet probe failed: {}", e);
                }
            }
        });
    });
}

async fn fake_auth_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(250).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(250)).await;
}
