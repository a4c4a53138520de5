//! TTS（文字转语音）模块：通过 Provider API（OpenAI TTS、Azure Speech）将文本合成为音频文件。
//!
//! Every provider implements [`SpeechSynthesizer`]. The batch generator only
//! sees the trait, so adding a provider means adding one implementation here.

mod azure;
mod openai;
mod output;

pub use azure::{voice_locale, AzureSpeech, AzureSpeechBuilder, DEFAULT_AZURE_OUTPUT_FORMAT};
pub use openai::{
    OpenAiSpeech, OpenAiSpeechBuilder, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};
pub use output::write_audio;

use crate::Result;
use async_trait::async_trait;
use std::path::Path;

/// A provider that turns text into an audio file.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Short provider label used in logs and progress output.
    fn name(&self) -> &str;

    /// Synthesize `text` with `voice` and persist the audio at `output`.
    ///
    /// On error no file is left at `output`.
    async fn synthesize(&self, text: &str, voice: &str, output: &Path) -> Result<()>;
}
