mod loader;
mod outcome;
mod predict_button;
mod result_card;
mod submit;

pub use loader::Loader;
pub use outcome::PredictionOutcome;
pub use predict_button::PredictButton;
pub use result_card::ResultCard;
pub use submit::submit_prediction;
