use super::ResultCard;
use crate::utils::WidgetState;
use dioxus::prelude::*;

/// Error text or result card, whichever the widget state holds.
#[component]
pub fn PredictionOutcome(state: WidgetState) -> Element {
    if let Some(message) = state.error() {
        return rsx! {
            p {
                class: "error-text",
                "{message}"
            }
        };
    }

    match state.prediction() {
        Some(prediction) => rsx! {
            ResultCard { prediction: prediction.clone() }
        },
        None => rsx! {},
    }
}
