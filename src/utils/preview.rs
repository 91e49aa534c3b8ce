use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A file picked by the user, held in memory until it is submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Inline `data:` URL for the preview image, built from this file's bytes.
    pub fn preview_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, BASE64.encode(&self.bytes))
    }
}
