use super::{ImageUpload, Prediction, PredictionError, WidgetKind};
use tracing::{debug, info, warn};

/// Visual state of one widget. A result and an error can never be shown at
/// the same time because they live in different variants.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Loading,
    Success(Prediction),
    Failure(String),
}

impl WidgetState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            WidgetState::Success(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WidgetState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PendingInput {
    Image(ImageUpload),
    Text(String),
}

/// Payload handed to the client once a submission passed local validation.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionRequest {
    Image(ImageUpload),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request for this widget is already in flight.
    Busy,
    /// Nothing to submit; the widget now shows the validation message.
    Validation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionWidget {
    kind: WidgetKind,
    input: Option<PendingInput>,
    preview: Option<String>,
    state: WidgetState,
}

impl PredictionWidget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            input: None,
            preview: None,
            state: WidgetState::Idle,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        match &self.input {
            Some(PendingInput::Image(upload)) => Some(&upload.file_name),
            _ => None,
        }
    }

    pub fn text(&self) -> &str {
        match &self.input {
            Some(PendingInput::Text(text)) => text,
            _ => "",
        }
    }

    /// The trigger stays disabled for exactly as long as a request is in flight.
    pub fn trigger_disabled(&self) -> bool {
        self.state.is_loading()
    }

    pub fn select_file(&mut self, upload: ImageUpload) {
        debug!(
            file_name = %upload.file_name,
            bytes = upload.bytes.len(),
            "image selected"
        );
        self.preview = Some(upload.preview_url());
        self.input = Some(PendingInput::Image(upload));
        self.clear_outcome();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = Some(PendingInput::Text(text.into()));
        self.clear_outcome();
    }

    /// Validate the pending input and move to `Loading`.
    ///
    /// On success the returned request must be sent and its outcome passed to
    /// [`PredictionWidget::finish`].
    pub fn begin_submit(&mut self) -> Result<PredictionRequest, SubmitRejected> {
        if self.state.is_loading() {
            return Err(SubmitRejected::Busy);
        }

        let request = match (self.kind, &self.input) {
            (WidgetKind::Image, Some(PendingInput::Image(upload))) => {
                Some(PredictionRequest::Image(upload.clone()))
            }
            (WidgetKind::Text, Some(PendingInput::Text(text))) if !text.trim().is_empty() => {
                Some(PredictionRequest::Text(text.clone()))
            }
            _ => None,
        };

        match request {
            Some(request) => {
                self.state = WidgetState::Loading;
                Ok(request)
            }
            None => {
                self.state = WidgetState::Failure(self.kind.validation_message().to_string());
                Err(SubmitRejected::Validation)
            }
        }
    }

    /// The only way out of `Loading`, for success and failure alike.
    pub fn finish(&mut self, outcome: Result<Prediction, PredictionError>) {
        if !self.state.is_loading() {
            debug!(kind = ?self.kind, "ignoring outcome for a widget that is not loading");
            return;
        }

        self.state = match outcome {
            Ok(prediction) => {
                info!(
                    kind = ?self.kind,
                    predicted_class = %prediction.predicted_class,
                    confidence = prediction.confidence,
                    "prediction received"
                );
                WidgetState::Success(prediction)
            }
            Err(e) => {
                warn!(kind = ?self.kind, error = %e, "prediction failed");
                WidgetState::Failure(self.kind.failure_message().to_string())
            }
        };
    }

    // New input invalidates what is on screen, but an in-flight request keeps
    // the widget loading until it resolves.
    fn clear_outcome(&mut self) {
        if !self.state.is_loading() {
            self.state = WidgetState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blight() -> Prediction {
        Prediction {
            predicted_class: "Blight".to_string(),
            confidence: 0.8734,
            recommendation: "Apply fungicide".to_string(),
            filename: None,
        }
    }

    fn image_widget_with_file() -> PredictionWidget {
        let mut widget = PredictionWidget::new(WidgetKind::Image);
        widget.select_file(ImageUpload::new("leaf.png", vec![1, 2, 3]));
        widget
    }

    #[test]
    fn test_new_widget_is_idle() {
        let widget = PredictionWidget::new(WidgetKind::Image);
        assert_eq!(widget.state(), &WidgetState::Idle);
        assert!(widget.preview().is_none());
        assert!(!widget.trigger_disabled());
    }

    #[test]
    fn test_select_file_sets_preview_from_file() {
        let upload = ImageUpload::new("leaf.png", vec![9, 8, 7]);
        let mut widget = PredictionWidget::new(WidgetKind::Image);
        widget.select_file(upload.clone());

        assert_eq!(widget.preview(), Some(upload.preview_url().as_str()));
        assert_eq!(widget.file_name(), Some("leaf.png"));
    }

    #[test]
    fn test_select_file_clears_previous_result_and_error() {
        let mut widget = image_widget_with_file();
        widget.begin_submit().unwrap();
        widget.finish(Ok(blight()));
        assert!(widget.state().prediction().is_some());

        widget.select_file(ImageUpload::new("other.png", vec![4]));
        assert_eq!(widget.state(), &WidgetState::Idle);

        let mut widget = PredictionWidget::new(WidgetKind::Image);
        let _ = widget.begin_submit();
        assert!(widget.state().error().is_some());
        widget.select_file(ImageUpload::new("leaf.png", vec![1]));
        assert_eq!(widget.state(), &WidgetState::Idle);
    }

    #[test]
    fn test_submit_without_file_is_validation_error() {
        let mut widget = PredictionWidget::new(WidgetKind::Image);
        assert_eq!(widget.begin_submit(), Err(SubmitRejected::Validation));
        assert_eq!(widget.state().error(), Some("Please select an image first."));
        assert!(!widget.trigger_disabled());
    }

    #[test]
    fn test_submit_blank_text_is_validation_error() {
        let mut widget = PredictionWidget::new(WidgetKind::Text);
        assert_eq!(widget.begin_submit(), Err(SubmitRejected::Validation));

        widget.set_text("   \n\t ");
        assert_eq!(widget.begin_submit(), Err(SubmitRejected::Validation));
        assert_eq!(widget.state().error(), Some("Please describe the symptoms."));
    }

    #[test]
    fn test_submit_text_is_sent_as_typed() {
        let mut widget = PredictionWidget::new(WidgetKind::Text);
        widget.set_text("  brown circular spots\n");
        assert_eq!(
            widget.begin_submit(),
            Ok(PredictionRequest::Text("  brown circular spots\n".to_string()))
        );
        assert!(widget.state().is_loading());
    }

    #[test]
    fn test_trigger_disabled_while_loading_and_reenabled_after() {
        let mut widget = image_widget_with_file();
        widget.begin_submit().unwrap();
        assert!(widget.trigger_disabled());
        widget.finish(Ok(blight()));
        assert!(!widget.trigger_disabled());

        widget.begin_submit().unwrap();
        assert!(widget.trigger_disabled());
        widget.finish(Err(PredictionError::Timeout));
        assert!(!widget.trigger_disabled());
    }

    #[test]
    fn test_second_submit_while_loading_is_rejected() {
        let mut widget = image_widget_with_file();
        widget.begin_submit().unwrap();
        assert_eq!(widget.begin_submit(), Err(SubmitRejected::Busy));
        assert!(widget.state().is_loading());
    }

    #[test]
    fn test_failure_uses_generic_message() {
        let mut widget = PredictionWidget::new(WidgetKind::Text);
        widget.set_text("wilting");
        widget.begin_submit().unwrap();
        widget.finish(Err(PredictionError::InvalidConfidence(3.0)));
        assert_eq!(widget.state().error(), Some("Analysis failed."));
        assert!(widget.state().prediction().is_none());
    }

    #[test]
    fn test_result_replaces_error_and_error_replaces_result() {
        let mut widget = image_widget_with_file();
        widget.begin_submit().unwrap();
        widget.finish(Err(PredictionError::Unconfigured));
        assert!(widget.state().error().is_some());

        widget.begin_submit().unwrap();
        widget.finish(Ok(blight()));
        assert_eq!(widget.state().prediction(), Some(&blight()));
        assert!(widget.state().error().is_none());

        widget.begin_submit().unwrap();
        widget.finish(Err(PredictionError::Timeout));
        assert!(widget.state().prediction().is_none());
        assert_eq!(
            widget.state().error(),
            Some("Prediction failed. Is the backend running?")
        );
    }

    #[test]
    fn test_editing_text_clears_displayed_result() {
        let mut widget = PredictionWidget::new(WidgetKind::Text);
        widget.set_text("spots");
        widget.begin_submit().unwrap();
        widget.finish(Ok(blight()));

        widget.set_text("spots on stems");
        assert_eq!(widget.state(), &WidgetState::Idle);
        assert_eq!(widget.text(), "spots on stems");
    }

    #[test]
    fn test_new_input_while_loading_keeps_loading() {
        let mut widget = image_widget_with_file();
        widget.begin_submit().unwrap();
        widget.select_file(ImageUpload::new("next.png", vec![5]));
        assert!(widget.state().is_loading());
        assert_eq!(widget.file_name(), Some("next.png"));
    }

    #[test]
    fn test_finish_without_loading_is_ignored() {
        let mut widget = PredictionWidget::new(WidgetKind::Image);
        widget.finish(Ok(blight()));
        assert_eq!(widget.state(), &WidgetState::Idle);
    }
}
