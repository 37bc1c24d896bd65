use dioxus::prelude::*;

use crate::components::WalletButton;
use crate::hooks::{logout, use_session, use_wallet_restore};
use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    let session = use_session();
    let nav = navigator();
    use_wallet_restore();

    let authenticated = session.read().is_authenticated();

    // Session gate: protected paths bounce back to the landing page with a
    // `replace`, so the guarded path never enters the history stack.
    let route = use_route::<Route>();
    if route.requires_session() && !authenticated {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div { class: "min-h-screen bg-white",
            // Navigation
            nav { class: "border-b backdrop-blur sticky top-0 z-50 bg-white",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        // Logo - links to landing page
                        div { class: "flex items-center",
                            Link { to: Route::Home {}, class: "flex items-center space-x-2",
                                span { class: "text-2xl font-bold text-indigo-600", "NFTLINK" }
                            }
                        }

                        // Nav links
                        div { class: "hidden sm:flex sm:items-center sm:space-x-8",
                            NavLink { to: Route::Home {}, label: "Home" }
                            NavLink { to: Route::Metaverse {}, label: "Metaverse" }
                        }

                        // Session controls
                        div { class: "flex items-center space-x-4",
                            if authenticated {
                                button {
                                    class: "btn btn-secondary text-sm",
                                    onclick: move |_| logout(session),
                                    "Logout"
                                }
                            }
                            WalletButton {}
                        }
                    }
                }
            }

            // Main content
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                Outlet::<Route> {}
            }

            // Footer
            footer { class: "border-t py-8 mt-auto",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-gray-500",
                    p { "NFTLINK - Grow your business with NFT technology" }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to: to,
            class: "text-gray-500 hover:text-indigo-600 px-3 py-2 text-sm font-medium transition-colors",
            "{label}"
        }
    }
}
