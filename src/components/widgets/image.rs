use super::common::{submit_prediction, PredictButton, PredictionOutcome};
use crate::utils::{ImageUpload, PredictionClient, PredictionWidget, WidgetKind};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::warn;

const INPUT_ID: &str = "image-upload";

#[component]
pub fn ImageClassifier(client: ReadSignal<Option<Arc<PredictionClient>>>) -> Element {
    let mut widget = use_signal(|| PredictionWidget::new(WidgetKind::Image));

    // Only the first file counts; the picker is single-select anyway.
    let on_file_change = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => widget
                .write()
                .select_file(ImageUpload::new(file_name, bytes.to_vec())),
            Err(e) => warn!(%file_name, error = %e, "failed to read selected file"),
        }
    };

    let (file_label, preview, loading, state) = {
        let w = widget.read();
        (
            w.file_name().unwrap_or("Upload Image").to_string(),
            w.preview().map(str::to_string),
            w.trigger_disabled(),
            w.state().clone(),
        )
    };

    rsx! {
        div {
            class: "classifier-container",

            h2 {
                class: "card-title",
                "{WidgetKind::Image.title()}"
            }

            label {
                r#for: INPUT_ID,
                class: "file-drop-zone",
                span { class: "upload-icon", "⇪" }
                p { "{file_label}" }
            }
            input {
                id: INPUT_ID,
                r#type: "file",
                accept: "image/*",
                onchange: on_file_change,
            }

            if let Some(src) = preview {
                img {
                    class: "preview-image",
                    src: "{src}",
                    alt: "Preview",
                }
            }

            PredictButton {
                label: WidgetKind::Image.trigger_label(),
                loading,
                on_click: move |_| submit_prediction(widget, client),
            }

            PredictionOutcome { state }
        }
    }
}
