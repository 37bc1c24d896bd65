use dioxus::prelude::*;

use crate::hooks::{login, use_session};
use crate::route::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = navigator();
    let mut entering = use_signal(|| false);

    let enter_metaverse = move |_| {
        if entering() {
            return;
        }
        entering.set(true);

        spawn(async move {
            login(session).await;
            entering.set(false);
            nav.push(Route::Metaverse {});
        });
    };

    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16",
            // Hero
            h1 { class: "text-5xl font-bold mb-6",
                span { class: "text-indigo-600", "NFT" }
                span { class: "text-gray-900", " Metaverse" }
            }

            p { class: "text-xl text-gray-500 mb-8 max-w-2xl mx-auto",
                "Redeem your code, connect your wallet and claim your NFT "
                "inside the metaverse."
            }

            // CTA
            div { class: "flex justify-center gap-4 mb-16",
                button {
                    class: "btn btn-primary text-lg px-8 py-3",
                    disabled: entering(),
                    onclick: enter_metaverse,
                    if entering() { "Entering..." } else { "Enter the metaverse" }
                }
            }

            // How it works
            div { class: "grid md:grid-cols-3 gap-8 mt-16",
                FeatureCard {
                    title: "Scan",
                    description: "Follow the QR code on your item to check its redeem code.",
                    icon: "📷",
                }
                FeatureCard {
                    title: "Connect",
                    description: "Connect your browser wallet to receive the token.",
                    icon: "🦊",
                }
                FeatureCard {
                    title: "Claim",
                    description: "Mint the NFT tied to your code straight to your address.",
                    icon: "🎁",
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div { class: "card text-center",
            div { class: "text-4xl mb-4", "{props.icon}" }
            h3 { class: "text-lg font-semibold text-indigo-600 mb-2", "{props.title}" }
            p { class: "text-gray-500", "{props.description}" }
        }
    }
}
