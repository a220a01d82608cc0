use crate::error::{AtelierError, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAIL_ART_PREAMBLE: &str = "Professional nail art design, macro photography style, high resolution, realistic texture. The design should be: ";

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
        }
    }
}

/// The composed instruction sent to the image model for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub instruction: String,
    pub aspect_ratio: AspectRatio,
}

impl GenerationRequest {
    /// The prompt is embedded as-is, empty strings included.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            instruction: format!("{}{}", NAIL_ART_PREAMBLE, prompt),
            aspect_ratio: AspectRatio::Square,
        }
    }
}

/// A generated image as a self-contained `data:image/png;base64,...` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePayload(String);

impl ImagePayload {
    pub fn from_base64(data: &str) -> Self {
        Self(format!("{}{}", DATA_URI_PREFIX, data))
    }

    /// Accepts only PNG base64 data URIs.
    pub fn from_data_uri(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with(DATA_URI_PREFIX) {
            return Err(AtelierError::ResponseError(
                "Not a base64 PNG data URI".into(),
            ));
        }
        Ok(Self(uri))
    }

    pub fn as_data_uri(&self) -> &str {
        &self.0
    }

    pub fn base64_data(&self) -> &str {
        self.0.strip_prefix(DATA_URI_PREFIX).unwrap_or_default()
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(self.base64_data())
            .map_err(|e| AtelierError::ResponseError(format!("Invalid base64 image: {}", e)))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ImagePayload {
    type Error = AtelierError;

    fn try_from(uri: String) -> Result<Self> {
        Self::from_data_uri(uri)
    }
}

impl From<ImagePayload> for String {
    fn from(payload: ImagePayload) -> Self {
        payload.0
    }
}

impl fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_composition() {
        let request = GenerationRequest::from_prompt("rose gold chrome");
        assert_eq!(
            request.instruction,
            "Professional nail art design, macro photography style, high resolution, realistic texture. The design should be: rose gold chrome"
        );
        assert_eq!(request.aspect_ratio.as_str(), "1:1");
    }

    #[test]
    fn test_empty_prompt_is_forwarded() {
        let request = GenerationRequest::from_prompt("");
        assert_eq!(request.instruction, NAIL_ART_PREAMBLE);
    }

    #[test]
    fn test_payload_wrapping() {
        let payload = ImagePayload::from_base64("AAAA");
        assert_eq!(payload.as_data_uri(), "data:image/png;base64,AAAA");
        assert_eq!(payload.base64_data(), "AAAA");
        assert_eq!(payload.decode().unwrap(), vec![0u8, 0, 0]);
    }

    #[test]
    fn test_from_data_uri_rejects_other_schemes() {
        assert!(ImagePayload::from_data_uri("https://example.com/a.png").is_err());
        let payload = ImagePayload::from_data_uri("data:image/png;base64,AAAA").unwrap();
        assert_eq!(payload, ImagePayload::from_base64("AAAA"));
    }

    #[test]
    fn test_deserialize_checks_data_uri() {
        assert!(serde_json::from_str::<ImagePayload>("\"abc\"").is_err());

        let payload: ImagePayload =
            serde_json::from_str("\"data:image/png;base64,AAAA\"").unwrap();
        assert_eq!(payload.base64_data(), "AAAA");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            "\"data:image/png;base64,AAAA\""
        );
    }
}
