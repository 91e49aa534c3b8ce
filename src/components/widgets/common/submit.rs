use crate::utils::{PredictionClient, PredictionError, PredictionWidget};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Validate the widget's input and, if it passes, send it in a spawned task.
///
/// The task hands every outcome to `finish`, so the widget always leaves
/// `Loading` once the request resolves or times out.
pub fn submit_prediction(
    mut widget: Signal<PredictionWidget>,
    client: ReadSignal<Option<Arc<PredictionClient>>>,
) {
    // Release the write guard before the rejection branch reads the signal
    let submitted = widget.write().begin_submit();
    let request = match submitted {
        Ok(request) => request,
        Err(rejected) => {
            debug!(kind = ?widget.peek().kind(), ?rejected, "submission rejected");
            return;
        }
    };
    let client = client();
    spawn(async move {
        let outcome = match client {
            Some(client) => client.predict(request).await,
            None => Err(PredictionError::Unconfigured),
        };
        widget.write().finish(outcome);
    });
}
