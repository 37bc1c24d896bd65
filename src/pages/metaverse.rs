use dioxus::prelude::*;

use crate::hooks::{mint_token, use_session, MintReceipt};
use crate::MINT_BASE_URL;

/// Wallet-gated page; the session gate itself lives in the Layout.
#[component]
pub fn Metaverse() -> Element {
    let session = use_session();

    let mut redeem = use_signal(String::new);
    let mut minting = use_signal(|| false);
    let mut mint_result = use_signal(|| None::<Result<MintReceipt, String>>);

    let session_read = session.read();
    let wallet_connected = session_read.wallet_connected();
    let wallet_address = session_read.wallet_address.clone();
    drop(session_read);

    let mint = {
        let wallet_address = wallet_address.clone();
        move |_| {
            let id = redeem();
            let address = wallet_address.clone();

            if id.is_empty() || address.is_empty() || minting() {
                return;
            }

            minting.set(true);
            mint_result.set(None);

            spawn(async move {
                let result = mint_token(MINT_BASE_URL, &id, &address).await;
                mint_result.set(Some(result));
                minting.set(false);
            });
        }
    };

    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16",
            h1 { class: "text-5xl font-bold mb-6",
                span { class: "text-indigo-600", "Welcome" }
                span { class: "text-gray-900", " to the metaverse" }
            }

            if !wallet_connected {
                p { class: "text-xl text-gray-500 mb-8",
                    "Connect your wallet to claim your NFT."
                }
            } else {
                p { class: "text-xl text-gray-500 mb-8",
                    "Minting to "
                    code { class: "font-mono text-indigo-600", "{wallet_address}" }
                }

                // Claim card
                div { class: "card max-w-xl mx-auto text-left",
                    p { class: "text-gray-500 text-sm mb-2", "Redeem code" }
                    div { class: "flex gap-2 mb-4",
                        input {
                            class: "border rounded px-3 py-2 w-full font-mono",
                            placeholder: "abc123",
                            value: "{redeem}",
                            oninput: move |e| redeem.set(e.value()),
                        }
                        button {
                            class: "btn btn-primary px-6",
                            disabled: redeem().is_empty() || minting(),
                            onclick: mint,
                            if minting() { "Minting..." } else { "Mint" }
                        }
                    }

                    // Mint result
                    if let Some(result) = mint_result.read().as_ref() {
                        match result {
                            Ok(receipt) => rsx! {
                                div { class: "p-2 bg-green-500/10 border border-green-500/30 rounded text-sm text-green-700",
                                    p { "Minted: {receipt.minted}" }
                                    p { class: "font-mono", "Code {receipt.id} -> {receipt.address}" }
                                }
                            },
                            Err(e) => rsx! {
                                div { class: "p-2 bg-red-500/10 border border-red-500/30 rounded text-sm text-red-700",
                                    "{e}"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
