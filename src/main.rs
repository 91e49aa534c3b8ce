use dioxus::prelude::*;

mod components;
mod utils;

use components::{Header, ImageClassifier, TextClassifier};
use std::sync::Arc;
use tracing::{error, info, warn};
use utils::{PredictionClient, Settings};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const APP_TITLE: &str = "AI Plant Health Assistant";

fn main() {
    utils::logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Endpoints come from settings on disk; a broken file falls back to defaults
    let settings = use_signal(|| {
        Settings::load_or_init().unwrap_or_else(|e| {
            warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        })
    });

    // Shared by both widgets; each widget still owns its own state
    let client = use_signal(|| match PredictionClient::new(&settings.read()) {
        Ok(client) => {
            info!(
                image_endpoint = client.image_endpoint(),
                text_endpoint = client.text_endpoint(),
                "prediction client ready"
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            error!("Failed to create prediction client: {}", e);
            None
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app-bg",

            div {
                class: "app-container",

                Header {
                    title: APP_TITLE.to_string(),
                    client,
                }

                div {
                    class: "classifiers-wrapper",

                    ImageClassifier { client }
                    TextClassifier { client }
                }
            }
        }
    }
}
