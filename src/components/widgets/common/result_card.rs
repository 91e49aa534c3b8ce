use crate::utils::Prediction;
use dioxus::prelude::*;

#[component]
pub fn ResultCard(prediction: Prediction) -> Element {
    let confidence = prediction.confidence_label();

    rsx! {
        div {
            class: "result-card",

            h3 { "{prediction.predicted_class}" }
            if let Some(filename) = &prediction.filename {
                p {
                    class: "result-source",
                    "{filename}"
                }
            }
            p {
                class: "confidence-score",
                "Confidence: {confidence}"
            }
            p { "Recommendation :" }
            p { "{prediction.recommendation}" }
        }
    }
}
