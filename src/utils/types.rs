use super::PredictionError;
use serde::{Deserialize, Serialize};

/// What the prediction service answers for both endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_class: String,
    pub confidence: f64,
    pub recommendation: String,
    // Echoed back by the image endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Prediction {
    /// Confidence as a percentage with exactly two fractional digits, e.g. "87.34"
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}", self.confidence * 100.0)
    }

    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence_percent())
    }

    /// A response whose confidence is not a probability counts as malformed.
    pub fn validate(&self) -> Result<(), PredictionError> {
        if self.confidence.is_finite() && (0.0..=1.0).contains(&self.confidence) {
            Ok(())
        } else {
            Err(PredictionError::InvalidConfidence(self.confidence))
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WidgetKind {
    Image,
    Text,
}

impl WidgetKind {
    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::Image => "Image Analysis",
            WidgetKind::Text => "Symptom Analysis",
        }
    }

    pub fn trigger_label(&self) -> &'static str {
        match self {
            WidgetKind::Image => "Identify Disease",
            WidgetKind::Text => "Analyze Symptoms",
        }
    }

    pub fn validation_message(&self) -> &'static str {
        match self {
            WidgetKind::Image => "Please select an image first.",
            WidgetKind::Text => "Please describe the symptoms.",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            WidgetKind::Image => "Prediction failed. Is the backend running?",
            WidgetKind::Text => "Analysis failed.",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ServiceStatus {
    Online,
    Offline,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "Service online",
            ServiceStatus::Offline => "Service offline",
        }
    }
}
