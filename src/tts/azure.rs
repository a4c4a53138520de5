//! Azure Speech client (REST synthesis endpoint with SSML bodies).

use super::output::{display_name, write_audio};
use super::SpeechSynthesizer;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub const AZURE_SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const AZURE_OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
pub const DEFAULT_AZURE_OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Client for Azure neural text-to-speech.
pub struct AzureSpeech {
    http_client: reqwest::Client,
    endpoint: String,
    region: String,
    subscription_key: String,
    output_format: String,
}

impl AzureSpeech {
    pub fn builder() -> AzureSpeechBuilder {
        AzureSpeechBuilder::new()
    }

    /// Synthesis URL for a region, e.g. `eastus`.
    pub fn regional_endpoint(region: &str) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            region.trim().to_lowercase()
        )
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request audio for `text` and return the raw MP3 bytes.
    pub async fn speech(&self, text: &str, voice: &str) -> Result<Vec<u8>> {
        let ssml = build_ssml(text, voice);
        tracing::debug!(endpoint = %self.endpoint, voice, "azure speech request");
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(AZURE_SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .header("Content-Type", "application/ssml+xml")
            .header(AZURE_OUTPUT_FORMAT_HEADER, &self.output_format)
            .header("User-Agent", concat!("card-voice/", env!("CARGO_PKG_VERSION")))
            .body(ssml)
            .send()
            .await
            .map_err(|e| {
                Error::network_with_context(
                    format!("Speech synthesis request failed: {}", e),
                    ErrorContext::new().with_source("azure_tts"),
                )
            })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            Error::network_with_context(
                format!("Failed to read synthesis response: {}", e),
                ErrorContext::new().with_source("azure_tts"),
            )
        })?;
        if !status.is_success() {
            // The REST API reports cancellations as plain HTTP errors; the
            // body, when present, carries the error details.
            let details = String::from_utf8_lossy(&bytes).trim().to_string();
            let message = if details.is_empty() {
                format!(
                    "Speech synthesis canceled: {}",
                    status.canonical_reason().unwrap_or("error")
                )
            } else {
                format!("Speech synthesis canceled: {}", details)
            };
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
            });
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for AzureSpeech {
    fn name(&self) -> &str {
        "azure"
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

/// Locale of a neural voice name: `es-ES-ElviraNeural` -> `es-ES`.
pub fn voice_locale(voice: &str) -> &str {
    let mut dashes = voice.match_indices('-').map(|(i, _)| i);
    match (dashes.next(), dashes.next()) {
        (Some(_), Some(second)) => &voice[..second],
        _ => "en-US",
    }
}

fn build_ssml(text: &str, voice: &str) -> String {
    format!(
        "<speak version='1.0' xml:lang='{}'><voice name='{}'>{}</voice></speak>",
        escape_xml(voice_locale(voice)),
        escape_xml(voice),
        escape_xml(text)
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct AzureSpeechBuilder {
    subscription_key: Option<String>,
    region: Option<String>,
    endpoint: Option<String>,
    output_format: Option<String>,
    timeout: Duration,
}

impl AzureSpeechBuilder {
    pub fn new() -> Self {
        Self {
            subscription_key: None,
            region: None,
            endpoint: None,
            output_format: None,
            timeout: Duration::from_secs(60),
        }
    }
    pub fn subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
    /// Full synthesis URL; overrides the one derived from the region.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<AzureSpeech> {
        let subscription_key = self
            .subscription_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::missing_credential("AZURE_SPEECH_KEY", "AZURE_SPEECH_KEY=your-key-here")
            })?;
        let region = self.region.filter(|r| !r.is_empty()).ok_or_else(|| {
            Error::missing_credential("AZURE_SPEECH_REGION", "AZURE_SPEECH_REGION=eastus")
        })?;
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| AzureSpeech::regional_endpoint(&region));
        url::Url::parse(&endpoint).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid synthesis endpoint: {}", e),
                ErrorContext::new()
                    .with_field_path("AZURE_SPEECH_ENDPOINT")
                    .with_details(endpoint.clone()),
            )
        })?;
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(AzureSpeech {
            http_client,
            endpoint,
            region,
            subscription_key,
            output_format: self
                .output_format
                .unwrap_or_else(|| DEFAULT_AZURE_OUTPUT_FORMAT.to_string()),
        })
    }
}

impl Default for AzureSpeechBuilder {
    fn default() -> Self {
        Self::new()
    }
}
