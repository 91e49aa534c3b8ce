use dioxus::prelude::*;

/// Spinner shown inside the trigger while a request is in flight.
#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "loader",
            role: "status",
            "aria-label": "Loading",
        }
    }
}
