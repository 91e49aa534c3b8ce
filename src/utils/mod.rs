mod client;
mod error;
pub mod logging;
#[cfg(test)]
pub(crate) mod mock_service;
mod preview;
mod settings;
mod types;
mod widget;

pub use client::PredictionClient;
pub use error::{PredictionError, SettingsError};
pub use preview::ImageUpload;
pub use settings::Settings;
pub use types::{Prediction, ServiceStatus, WidgetKind};
pub use widget::{PredictionRequest, PredictionWidget, WidgetState};
