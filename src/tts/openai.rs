//! OpenAI speech client (`/v1/audio/speech`).

use super::output::{display_name, write_audio};
use super::SpeechSynthesizer;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "tts-1";

/// Client for OpenAI text-to-speech synthesis.
pub struct OpenAiSpeech {
    http_client: reqwest::Client,
    model: String,
    base_url: String,
    endpoint_path: String,
    api_key: String,
    speed: f32,
}

impl OpenAiSpeech {
    pub fn builder() -> OpenAiSpeechBuilder {
        OpenAiSpeechBuilder::new()
    }

    /// Request audio for `text` and return the raw MP3 bytes.
    pub async fn speech(&self, text: &str, voice: &str) -> Result<Vec<u8>> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path);
        let body = serde_json::json!({
            "model": self.model,
            "input": text,
            "voice": voice,
            "speed": self.speed,
            "response_format": "mp3",
        });
        tracing::debug!(%endpoint, model = %self.model, voice, "openai speech request");
        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                Error::network_with_context(
                    format!("TTS request failed: {}", e),
                    ErrorContext::new().with_source("openai_tts"),
                )
            })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            Error::network_with_context(
                format!("Failed to read TTS response: {}", e),
                ErrorContext::new().with_source("openai_tts"),
            )
        })?;
        if !status.is_success() {
            let body_str = String::from_utf8_lossy(&bytes);
            return Err(Error::Remote {
                status: status.as_u16(),
                message: body_str.trim().to_string(),
            });
        }
        Ok(bytes.to_vec())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeech {
    fn name(&self) -> &str {
        "openai"
    }

    async fn synthesize(&self, text: &str, voice: &str, output: &Path) -> Result<()> {
        let audio = self.speech(text, voice).await.map_err(|e| match e {
            Error::Network { message, context } => Error::Network {
                message,
                context: context.with_field_path(display_name(output)),
            },
            other => other,
        })?;
        write_audio(output, &audio).await
    }
}

pub struct OpenAiSpeechBuilder {
    model: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    endpoint_path: Option<String>,
    speed: f32,
    timeout: Duration,
}

impl OpenAiSpeechBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            api_key: None,
            base_url: None,
            endpoint_path: None,
            speed: 1.0,
            timeout: Duration::from_secs(60),
        }
    }
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OpenAiSpeech> {
        let model = self
            .model
            .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
        let api_key = self
            .api_key
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::missing_credential("OPENAI_API_KEY", "export OPENAI_API_KEY='your-api-key-here'")
            })?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("OPENAI_BASE_URL")
                    .with_details(base_url.clone()),
            )
        })?;
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| "/v1/audio/speech".to_string());
        let endpoint_path = if endpoint_path.starts_with('/') {
            endpoint_path
        } else {
            format!("/{}", endpoint_path)
        };
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(OpenAiSpeech {
            http_client,
            model,
            base_url,
            endpoint_path,
            api_key,
            speed: self.speed,
        })
    }
}

impl Default for OpenAiSpeechBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = OpenAiSpeech::builder().api_key("sk-test").build().unwrap();
        assert_eq!(client.model(), "tts-1");
        assert_eq!(client.endpoint_path, "/v1/audio/speech");
        assert_eq!(client.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(client.speed, 1.0);
    }

    #[test]
    fn test_endpoint_path_gets_leading_slash() {
        let client = OpenAiSpeech::builder()
            .api_key("sk-test")
            .endpoint_path("v1/audio/speech")
            .build()
            .unwrap();
        assert_eq!(client.endpoint_path, "/v1/audio/speech");
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let err = OpenAiSpeech::builder()
            .api_key("sk-test")
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
