use super::image::{AspectRatio, ImagePayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.into()),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.generation_config = Some(GenerationConfig {
            image_config: Some(ImageConfig { aspect_ratio }),
        });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
    }

    /// First part, in response order, that carries inline image data.
    pub fn first_image(&self) -> Option<ImagePayload> {
        self.parts().find_map(|part| {
            part.inline_data
                .as_ref()
                .filter(|inline| !inline.data.is_empty())
                .map(|inline| ImagePayload::from_base64(&inline.data))
        })
    }

    /// Concatenated text parts, trimmed.
    pub fn text(&self) -> String {
        self.parts()
            .filter_map(|part| part.text.as_deref())
            .collect::<String>()
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::text("a prompt").with_aspect_ratio(AspectRatio::Square);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "a prompt" }] }],
                "generationConfig": { "imageConfig": { "aspectRatio": "1:1" } }
            })
        );
    }

    #[test]
    fn test_text_request_has_no_generation_config() {
        let body = serde_json::to_value(GenerateContentRequest::text("hi")).unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_first_image_skips_text_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your design" },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                        { "inlineData": { "mimeType": "image/png", "data": "BBBB" } }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(
            response.first_image().unwrap().as_data_uri(),
            "data:image/png;base64,AAAA"
        );
        assert_eq!(response.text(), "Here is your design");
    }

    #[test]
    fn test_no_image_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Sorry, I can't draw that." }] } }]
        }))
        .unwrap();
        assert!(response.first_image().is_none());

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.first_image().is_none());
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_candidate_without_content_is_skipped() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "finishReason": "SAFETY" },
                { "content": { "parts": [{ "inlineData": { "data": "CCCC" } }] } }
            ]
        }))
        .unwrap();
        assert_eq!(
            response.first_image().unwrap(),
            ImagePayload::from_base64("CCCC")
        );
    }
}
