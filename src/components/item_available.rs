use dioxus::prelude::*;

/// Green confirmation card shown when the redeem code can still be claimed.
#[component]
pub fn ItemAvailable() -> Element {
    rsx! {
        div { class: "bg-green-100 text-center justify-center rounded-md p-3 flex",
            svg {
                class: "stroke-2 stroke-current text-green-600 h-8 w-8 mr-2 flex-shrink-0",
                view_box: "0 0 24 24",
                fill: "none",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M0 0h24v24H0z", stroke: "none" }
                circle { cx: "12", cy: "12", r: "9" }
                path { d: "M9 12l2 2 4-4" }
            }
            div { class: "text-green-700 text-center justify-center",
                div { class: "font-bold text-xl", "Redeem Code available!" }
                div { "Redirecting to home page." }
            }
        }
    }
}
