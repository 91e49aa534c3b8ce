use crate::utils::{PredictionClient, ServiceStatus};
use dioxus::prelude::*;
use std::sync::Arc;

#[component]
pub fn Header(title: String, client: ReadSignal<Option<Arc<PredictionClient>>>) -> Element {
    // Check the service once on mount; clicking the badge checks again.
    let mut status = use_resource(move || {
        let client = client();
        async move {
            match client {
                Some(client) => client.health().await,
                None => ServiceStatus::Offline,
            }
        }
    });

    let (badge_class, badge_label) = match *status.read() {
        Some(ServiceStatus::Online) => ("status-badge online", ServiceStatus::Online.label()),
        Some(ServiceStatus::Offline) => ("status-badge offline", ServiceStatus::Offline.label()),
        None => ("status-badge pending", "Checking service..."),
    };

    rsx! {
        header {
            class: "app-header",

            h1 {
                class: "main-title",
                "{title}"
            }

            button {
                class: "{badge_class}",
                title: "Check the prediction service again",
                onclick: move |_| status.restart(),
                span { class: "status-dot" }
                "{badge_label}"
            }
        }
    }
}
