use dioxus::prelude::*;

use crate::components::{ItemAvailable, ItemNotAvailable};
use crate::hooks::{use_availability, Availability};
use crate::route::Route;

/// Landing view for redeem links. Reads the code from the query string,
/// runs the one-shot availability check and renders exactly one outcome.
#[component]
pub fn Welcome(uuid: String, redeem: String) -> Element {
    let nav = navigator();
    let code = redeem_code(&uuid, &redeem);
    let availability = use_availability(code.clone());

    let go_home = move |_| {
        nav.push(Route::Home {});
    };

    let subtitle = if code.is_some() {
        "Checking redeem code"
    } else {
        "Scan a QR code to check a redeem code."
    };

    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16",
            // Hero
            h1 { class: "text-4xl tracking-tight font-extrabold text-gray-900 sm:text-5xl md:text-6xl",
                span { "Grow your business with " }
                span { class: "text-indigo-600", "NFT" }
                span { " technology" }
            }

            p { class: "mt-3 text-base text-gray-500 sm:mt-5 sm:text-lg md:mt-5 md:text-xl",
                "{subtitle}"
            }

            if code.is_some() {
                div { class: "mt-8 max-w-xl mx-auto",
                    match *availability.read() {
                        Availability::Pending => rsx! {
                            p { class: "text-gray-400 animate-pulse", "Checking..." }
                        },
                        Availability::Available => rsx! {
                            ItemAvailable {}
                            button {
                                class: "mt-4 w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-indigo-700 bg-indigo-100 hover:bg-indigo-200 md:py-4 md:text-lg md:px-10",
                                onclick: go_home,
                                "Go home page"
                            }
                        },
                        Availability::Unavailable => rsx! {
                            ItemNotAvailable {}
                        },
                        Availability::Error => rsx! {
                            div { class: "bg-yellow-100 text-yellow-800 rounded-md p-3",
                                div { class: "font-bold text-xl", "Could not check this code" }
                                div { "Something went wrong talking to the redeem service. Open the link again." }
                            }
                        },
                    }
                }
            }
        }
    }
}

/// The `uuid` query parameter carries the redeem code; `redeem` is the
/// legacy name and only consulted when `uuid` is absent. Empty means no
/// lookup at all.
fn redeem_code(uuid: &str, redeem: &str) -> Option<String> {
    if !uuid.is_empty() {
        Some(uuid.to_string())
    } else if !redeem.is_empty() {
        Some(redeem.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::redeem_code;

    #[test]
    fn uuid_param_wins_over_legacy_redeem() {
        assert_eq!(
            redeem_code("abc123", "old456"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn legacy_redeem_param_is_a_fallback() {
        assert_eq!(redeem_code("", "old456"), Some("old456".to_string()));
    }

    #[test]
    fn no_params_means_no_lookup() {
        assert_eq!(redeem_code("", ""), None);
    }
}
