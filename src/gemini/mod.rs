pub mod image_client;
pub mod text_client;
pub mod traits;

use crate::{
    config::GeminiConfig,
    error::{AtelierError, Result},
    models::{GenerateContentRequest, GenerateContentResponse},
};
use reqwest::Client;
use std::{sync::Arc, time::Duration};

pub use image_client::ImageClient;
pub use text_client::TextClient;
pub use traits::ImageGenerator;

#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
    text_client: TextClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AtelierError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        if !config.has_credentials() {
            log::warn!("No Gemini API key configured; generation will produce no results");
        }

        let config = Arc::new(config);
        Ok(Self {
            image_client: ImageClient::new(http.clone(), config.clone()),
            text_client: TextClient::new(http, config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }
}

/// POST `{base_url}/models/{model}:generateContent` and decode the reply.
pub(crate) async fn generate_content(
    http: &Client,
    config: &GeminiConfig,
    model: &str,
    api_key: &str,
    body: &GenerateContentRequest,
) -> Result<GenerateContentResponse> {
    let url = format!("{}/models/{}:generateContent", config.base_url, model);
    let request_json = serde_json::to_string(body)
        .map_err(|e| AtelierError::SerializationError(e.to_string()))?;

    log::debug!("generateContent request payload: {}", request_json);

    let response = http
        .post(&url)
        .header("x-goog-api-key", api_key)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(request_json)
        .send()
        .await
        .map_err(|e| AtelierError::HttpError(e.to_string()))?;

    let status = response.status();
    let response_str = response
        .text()
        .await
        .map_err(|e| AtelierError::ResponseError(e.to_string()))?;

    if !status.is_success() {
        log::error!("Gemini returned {} for model {}", status, model);
        return Err(AtelierError::ServiceError {
            status: status.as_u16(),
            message: service_error_message(&response_str),
        });
    }

    serde_json::from_str(&response_str).map_err(|e| AtelierError::ResponseError(e.to_string()))
}

fn service_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
pub(crate) mod test_support {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answers exactly one HTTP request with `status` and `body`; the handle yields the raw
    /// request that was received.
    pub async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                    let content_length = head
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|value| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&buf).to_string()
        });

        (format!("http://{}/v1beta", addr), handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_message_prefers_error_field() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(service_error_message(body), "API key not valid.");
        assert_eq!(service_error_message("upstream timeout"), "upstream timeout");
    }

    #[test]
    fn test_client_without_key_builds() {
        let client = GeminiClient::new(GeminiConfig::new());
        assert!(client.is_ok());
    }
}
