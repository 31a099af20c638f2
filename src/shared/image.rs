//! Image payloads
//!
//! Avatars, icons, emojis and event covers are uploaded inline as
//! `data:` URIs.

use base64::Engine;
use serde::{Serialize, Serializer};

/// Raw image bytes with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageData {
    /// Create a new image payload.
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes,
        }
    }

    /// PNG image.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new("image/png", bytes)
    }

    /// Guess the MIME type from a file extension, falling back to PNG.
    pub fn from_extension(extension: &str, bytes: Vec<u8>) -> Self {
        let content_type = match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "image/png",
        };
        Self::new(content_type, bytes)
    }

    /// Render as a `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_data_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        let image = ImageData::png(vec![1, 2, 3]);
        assert_eq!(image.to_data_uri(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageData::from_extension("JPG", vec![]).content_type, "image/jpeg");
        assert_eq!(ImageData::from_extension("bmp", vec![]).content_type, "image/png");
    }

    #[test]
    fn test_serializes_as_data_uri_string() {
        let json = serde_json::to_value(ImageData::new("image/gif", vec![0])).unwrap();
        assert_eq!(json, serde_json::json!("data:image/gif;base64,AA=="));
    }
}
