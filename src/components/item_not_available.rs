use dioxus::prelude::*;

/// Red card shown when the redeem code was already claimed.
#[component]
pub fn ItemNotAvailable() -> Element {
    rsx! {
        div { class: "bg-red-100 text-center rounded-md p-3 flex justify-center",
            svg {
                class: "stroke-2 stroke-current text-red-600 h-8 w-8 mr-2 flex-shrink-0",
                view_box: "0 0 24 24",
                fill: "none",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M0 0h24v24H0z", stroke: "none" }
                circle { cx: "12", cy: "12", r: "9" }
                path { d: "M10 10l4 4m0 -4l-4 4" }
            }
            div { class: "text-red-700 text-center justify-center",
                div { class: "font-bold text-xl", "Redeem Code Not available!" }
                div { "Check QR code." }
            }
        }
    }
}
