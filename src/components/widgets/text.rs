use super::common::{submit_prediction, PredictButton, PredictionOutcome};
use crate::utils::{PredictionClient, PredictionWidget, WidgetKind};
use dioxus::prelude::*;
use std::sync::Arc;

const PLACEHOLDER: &str =
    "e.g., The leaves show brown, circular spots and are starting to wilt...";

#[component]
pub fn TextClassifier(client: ReadSignal<Option<Arc<PredictionClient>>>) -> Element {
    let mut widget = use_signal(|| PredictionWidget::new(WidgetKind::Text));

    let (text, loading, state) = {
        let w = widget.read();
        (w.text().to_string(), w.trigger_disabled(), w.state().clone())
    };

    rsx! {
        div {
            class: "classifier-container",

            h2 {
                class: "card-title",
                "{WidgetKind::Text.title()}"
            }

            textarea {
                placeholder: PLACEHOLDER,
                value: "{text}",
                oninput: move |evt| widget.write().set_text(evt.value()),
            }

            PredictButton {
                label: WidgetKind::Text.trigger_label(),
                loading,
                on_click: move |_| submit_prediction(widget, client),
            }

            PredictionOutcome { state }
        }
    }
}
