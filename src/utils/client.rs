use super::{ImageUpload, Prediction, PredictionError, PredictionRequest, ServiceStatus, Settings};
use reqwest::{multipart, Client, RequestBuilder, Url};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
const FILE_FIELD: &str = "file";
const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);

// ============================================================================
// API Types - Request
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct TextPredictionRequest<'a> {
    text: &'a str,
}

// ============================================================================
// Prediction Client
// ============================================================================

#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: Arc<Url>,
    image_endpoint: Arc<Url>,
    text_endpoint: Arc<Url>,
}

impl PartialEq for PredictionClient {
    fn eq(&self, other: &Self) -> bool {
        self.image_endpoint == other.image_endpoint && self.text_endpoint == other.text_endpoint
    }
}

impl std::fmt::Debug for PredictionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionClient")
            .field("image_endpoint", &self.image_endpoint.as_str())
            .field("text_endpoint", &self.text_endpoint.as_str())
            .finish()
    }
}

impl PredictionClient {
    pub fn new(settings: &Settings) -> Result<Self, PredictionError> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(PredictionError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: Arc::new(parse_endpoint(&settings.api_base)?),
            image_endpoint: Arc::new(parse_endpoint(&settings.image_endpoint())?),
            text_endpoint: Arc::new(parse_endpoint(&settings.text_endpoint())?),
        })
    }

    pub fn image_endpoint(&self) -> &str {
        self.image_endpoint.as_str()
    }

    pub fn text_endpoint(&self) -> &str {
        self.text_endpoint.as_str()
    }

    /// Send one prediction request. Exactly one POST is issued; nothing is
    /// retried.
    pub async fn predict(&self, request: PredictionRequest) -> Result<Prediction, PredictionError> {
        match request {
            PredictionRequest::Image(upload) => self.predict_image(&upload).await,
            PredictionRequest::Text(text) => self.predict_text(&text).await,
        }
    }

    // ========================================================================
    // Image Prediction (multipart)
    // ========================================================================

    pub async fn predict_image(&self, upload: &ImageUpload) -> Result<Prediction, PredictionError> {
        let part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(PredictionError::Transport)?;
        let form = multipart::Form::new().part(FILE_FIELD, part);

        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            endpoint = %self.image_endpoint,
            bytes = upload.bytes.len(),
            "sending image prediction"
        );

        let builder = self
            .client
            .post(self.image_endpoint.as_str())
            .multipart(form);
        self.send(builder, request_id).await
    }

    // ========================================================================
    // Text Prediction (JSON)
    // ========================================================================

    pub async fn predict_text(&self, text: &str) -> Result<Prediction, PredictionError> {
        let request_id = Uuid::new_v4();
        // Only the length; symptom descriptions stay out of the logs.
        info!(
            %request_id,
            endpoint = %self.text_endpoint,
            chars = text.chars().count(),
            "sending text prediction"
        );

        let builder = self
            .client
            .post(self.text_endpoint.as_str())
            .json(&TextPredictionRequest { text });
        self.send(builder, request_id).await
    }

    // ========================================================================
    // Service Health
    // ========================================================================

    /// Check the service root. Any answer in the 2xx range counts as online;
    /// no answer within `HEALTH_TIMEOUT` counts as offline.
    pub async fn health(&self) -> ServiceStatus {
        let response = self
            .client
            .get(self.base_url.as_str())
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => ServiceStatus::Online,
            Ok(response) => {
                debug!(status = %response.status(), "health check returned non-success");
                ServiceStatus::Offline
            }
            Err(e) => {
                debug!(error = %e, "health check failed");
                ServiceStatus::Offline
            }
        }
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        request_id: Uuid,
    ) -> Result<Prediction, PredictionError> {
        let response = builder
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(PredictionError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%request_id, %status, "prediction service returned an error");
            return Err(PredictionError::Status {
                status,
                detail: error_detail(error_text),
            });
        }

        let prediction: Prediction = response
            .json()
            .await
            .map_err(PredictionError::from_decode)?;
        prediction.validate()?;

        debug!(%request_id, "prediction response decoded");
        Ok(prediction)
    }
}

fn parse_endpoint(url: &str) -> Result<Url, PredictionError> {
    Url::parse(url).map_err(|e| PredictionError::InvalidEndpoint {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

// Error bodies look like `{"detail": "..."}`; fall back to the raw text.
fn error_detail(error_text: String) -> String {
    serde_json::from_str::<serde_json::Value>(&error_text)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(serde_json::Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or(error_text)
}
