mod header;
mod widgets;

pub use header::Header;
pub use widgets::{ImageClassifier, TextClassifier};
