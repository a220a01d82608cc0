use super::generate_content;
use crate::{
    config::GeminiConfig,
    error::{AtelierError, Result},
    models::{GenerateContentRequest, SuggestionRequest, SUGGESTION_EMPTY, SUGGESTION_FALLBACK},
};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct TextClient {
    http: Client,
    config: Arc<GeminiConfig>,
}

impl TextClient {
    pub fn new(http: Client, config: Arc<GeminiConfig>) -> Self {
        Self { http, config }
    }

    /// Short design description for a mood. Never fails: errors fall back to a
    /// "contact the studio" message.
    pub async fn suggest(&self, mood: &str) -> String {
        match self.try_suggest(SuggestionRequest::new(mood)).await {
            Ok(text) if text.is_empty() => SUGGESTION_EMPTY.to_string(),
            Ok(text) => text,
            Err(e) => {
                log::error!("Error generating text suggestion: {}", e);
                SUGGESTION_FALLBACK.to_string()
            }
        }
    }

    pub async fn try_suggest(&self, request: SuggestionRequest) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AtelierError::ConfigError("Gemini API key is not set".into()))?;

        let model_id = self.config.text_model.as_str();
        log::info!("Requesting design suggestion from model: {}", model_id);

        let body = GenerateContentRequest::text(request.instruction());
        let response = generate_content(&self.http, &self.config, model_id, api_key, &body).await?;
        Ok(response.text())
    }
}
