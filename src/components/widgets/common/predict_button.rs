use super::Loader;
use dioxus::prelude::*;

#[component]
pub fn PredictButton(label: &'static str, loading: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "predict-button",
            disabled: loading,
            onclick: move |_| on_click.call(()),

            if loading {
                Loader {}
            } else {
                "{label}"
            }
        }
    }
}
