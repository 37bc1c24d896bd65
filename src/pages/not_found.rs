use dioxus::prelude::*;

use crate::route::Route;

/// Terminal catch-all for any unmatched path.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16",
            h1 { class: "text-5xl font-bold text-gray-900 mb-6", "There's nothing here: 404!" }
            p { class: "text-gray-500 mb-8", "No page at /{path}" }
            Link {
                to: Route::Home {},
                class: "btn btn-primary text-lg px-8 py-3",
                "Back to the home page"
            }
        }
    }
}
