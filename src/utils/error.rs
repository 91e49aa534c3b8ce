use reqwest::StatusCode;
use std::path::PathBuf;

/// Everything that can go wrong between pressing the trigger and having a
/// prediction to show. The UI collapses all of these into one message per
/// widget; the detail only ends up in the logs.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("No prediction service is configured")]
    Unconfigured,

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Prediction service error ({status}): {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("Failed to parse prediction response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Confidence {0} is outside [0, 1]")]
    InvalidConfidence(f64),
}

impl PredictionError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PredictionError::Timeout
        } else {
            PredictionError::Transport(err)
        }
    }

    pub(crate) fn from_decode(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PredictionError::Timeout
        } else {
            PredictionError::Decode(err)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Could not find config directory")]
    NoConfigDir,

    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
