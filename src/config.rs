use std::env;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub image_model: String,
    pub text_model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `GEMINI_API_KEY` (or the legacy `API_KEY`) and the optional overrides.
    /// A missing or blank key leaves `api_key` unset.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
        let defaults = Self::default();

        GeminiConfig {
            api_key,
            base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            image_model: env::var("GEMINI_IMAGE_MODEL").unwrap_or(defaults.image_model),
            text_model: env::var("GEMINI_TEXT_MODEL").unwrap_or(defaults.text_model),
            timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Key suitable for logs: first four characters only.
    pub fn masked_api_key(&self) -> String {
        match &self.api_key {
            Some(key) => format!("{}...", &key.chars().take(4).collect::<String>()),
            None => "<unset>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::new();
        assert!(!config.has_credentials());
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.text_model, "gemini-2.5-flash");
        assert_eq!(config.masked_api_key(), "<unset>");
    }

    #[test]
    fn test_builders() {
        let config = GeminiConfig::new()
            .with_api_key("AIzaSyExample")
            .with_base_url("http://127.0.0.1:9000/v1beta/")
            .with_timeout_secs(5);
        assert!(config.has_credentials());
        assert_eq!(config.base_url, "http://127.0.0.1:9000/v1beta");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.masked_api_key(), "AIza...");
    }

    // The only test touching these variables, so the steps run in order.
    #[test]
    fn test_from_env_credentials() {
        env::remove_var("GEMINI_API_KEY");
        env::remove_var("API_KEY");
        assert!(!GeminiConfig::from_env().has_credentials());

        env::set_var("API_KEY", "legacy-key");
        assert_eq!(GeminiConfig::from_env().api_key.as_deref(), Some("legacy-key"));

        env::set_var("GEMINI_API_KEY", "gemini-key");
        assert_eq!(GeminiConfig::from_env().api_key.as_deref(), Some("gemini-key"));

        env::set_var("GEMINI_API_KEY", "   ");
        env::remove_var("API_KEY");
        assert!(!GeminiConfig::from_env().has_credentials());

        env::remove_var("GEMINI_API_KEY");
    }
}
