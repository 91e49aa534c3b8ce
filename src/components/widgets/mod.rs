mod common;
mod image;
mod text;

pub use image::ImageClassifier;
pub use text::TextClassifier;
