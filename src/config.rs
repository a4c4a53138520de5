//! Environment-driven configuration for the two generator binaries.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binaries. Empty values count as unset.

use crate::batch::Voices;
use crate::pricing::CharacterPricing;
use crate::tts::{AzureSpeech, OpenAiSpeech};
use crate::{Error, ErrorContext, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTPUT_DIR: &str = "public/audio";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const OPENAI_KEY_HINT: &str = "\
Please create a .env file with your API key:
  1. Copy .env.example to .env
  2. Add your OpenAI API key to the .env file

Or set it directly:
  export OPENAI_API_KEY='your-api-key-here'";

const AZURE_KEY_HINT: &str = "\
Please add your Azure Speech Service credentials to .env:
  AZURE_SPEECH_KEY=your-key-here
  AZURE_SPEECH_REGION=your-region-here

How to get credentials:
  1. Go to https://portal.azure.com
  2. Create or select 'Azure AI Speech' service
  3. Go to 'Keys and Endpoint'
  4. Copy KEY 1 and LOCATION/REGION";

const AZURE_REGION_HINT: &str = "\
Please add your Azure region to .env:
  AZURE_SPEECH_REGION=eastus

Common regions: eastus, westus, westeurope, etc.";

/// Settings shared by every provider.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub voices: Voices,
    pub timeout: Duration,
}

impl OutputConfig {
    fn from_lookup<F>(lookup: &F, default_voices: Voices) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_dir = lookup("CARD_AUDIO_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let voices = Voices::new(
            lookup("CARD_AUDIO_VOICE_EN").unwrap_or(default_voices.english),
            lookup("CARD_AUDIO_VOICE_ES").unwrap_or(default_voices.spanish),
        );
        let timeout_secs = match lookup("CARD_AUDIO_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    "Timeout must be a whole number of seconds",
                    ErrorContext::new()
                        .with_field_path("CARD_AUDIO_TIMEOUT_SECS")
                        .with_details(raw.clone()),
                )
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            output_dir,
            voices,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub output: OutputConfig,
}

impl OpenAiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve settings through `lookup`; credentials are checked first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = non_empty(lookup);
        let api_key = lookup("OPENAI_API_KEY")
            .ok_or_else(|| Error::missing_credential("OPENAI_API_KEY", OPENAI_KEY_HINT))?;
        Ok(Self {
            api_key,
            base_url: lookup("OPENAI_BASE_URL"),
            model: lookup("OPENAI_TTS_MODEL")
                .unwrap_or_else(|| crate::tts::DEFAULT_OPENAI_MODEL.to_string()),
            output: OutputConfig::from_lookup(&lookup, Voices::openai())?,
        })
    }

    pub fn pricing(&self) -> CharacterPricing {
        CharacterPricing::for_model(&self.model).unwrap_or_else(CharacterPricing::openai_tts_1)
    }

    pub fn build_client(&self) -> Result<OpenAiSpeech> {
        let mut builder = OpenAiSpeech::builder()
            .api_key(&self.api_key)
            .model(&self.model)
            .timeout(self.output.timeout);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        builder.build()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AzureConfig {
    pub subscription_key: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub output: OutputConfig,
}

impl AzureConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve settings through `lookup`; the key is checked before the region.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = non_empty(lookup);
        let subscription_key = lookup("AZURE_SPEECH_KEY")
            .ok_or_else(|| Error::missing_credential("AZURE_SPEECH_KEY", AZURE_KEY_HINT))?;
        let region = lookup("AZURE_SPEECH_REGION")
            .ok_or_else(|| Error::missing_credential("AZURE_SPEECH_REGION", AZURE_REGION_HINT))?;
        Ok(Self {
            subscription_key,
            region,
            endpoint: lookup("AZURE_SPEECH_ENDPOINT"),
            output: OutputConfig::from_lookup(&lookup, Voices::azure())?,
        })
    }

    pub fn pricing(&self) -> CharacterPricing {
        CharacterPricing::azure_neural()
    }

    pub fn build_client(&self) -> Result<AzureSpeech> {
        let mut builder = AzureSpeech::builder()
            .subscription_key(&self.subscription_key)
            .region(&self.region)
            .timeout(self.output.timeout);
        if let Some(endpoint) = &self.endpoint {
            builder = builder.endpoint(endpoint);
        }
        builder.build()
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_empty<F>(lookup: F) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    move |name| lookup(name).filter(|v| !v.trim().is_empty())
}
