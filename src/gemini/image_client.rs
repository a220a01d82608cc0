use super::{generate_content, traits::ImageGenerator};
use crate::{
    config::GeminiConfig,
    error::Result,
    models::{GenerateContentRequest, GenerationRequest, ImagePayload},
};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct ImageClient {
    http: Client,
    config: Arc<GeminiConfig>,
}

impl ImageClient {
    pub fn new(http: Client, config: Arc<GeminiConfig>) -> Self {
        Self { http, config }
    }

    /// Generates one square nail art concept for `prompt`.
    ///
    /// Returns `Ok(None)` when no API key is configured or when the model answered without
    /// any inline image part.
    pub async fn generate(&self, prompt: &str) -> Result<Option<ImagePayload>> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) => key,
            None => {
                log::warn!("Gemini API key is not set; skipping image generation");
                return Ok(None);
            }
        };

        let model_id = self.config.image_model.as_str();
        let request = GenerationRequest::from_prompt(prompt);
        let body =
            GenerateContentRequest::text(request.instruction).with_aspect_ratio(request.aspect_ratio);

        log::info!("Generating image with model: {}", model_id);

        let response = generate_content(&self.http, &self.config, model_id, api_key, &body)
            .await
            .map_err(|e| {
                log::error!("Error generating nail art: {}", e);
                e
            })?;

        match response.first_image() {
            Some(payload) => {
                log::debug!(
                    "Received image data: {} base64 characters",
                    payload.base64_data().len()
                );
                Ok(Some(payload))
            }
            None => {
                log::warn!("Gemini responded without image data");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, prompt: &str) -> Result<Option<ImagePayload>> {
        ImageClient::generate(self, prompt).await
    }
}
