//! # card-voice
//!
//! 扑克牌语音生成：为 52 张牌生成英语与西班牙语的语音文件。
//!
//! Batch generator for spoken playing-card announcements. For every card in
//! English and Spanish it synthesizes a short phrase ("A of Spades",
//! "As de Picas") through a cloud text-to-speech provider and writes
//! `{lang}_{rank}_{suit}.mp3` into an output directory, skipping files that
//! already exist.
//!
//! ## Providers
//!
//! - **OpenAI**: `/v1/audio/speech`, model `tts-1`, voice `nova`
//! - **Azure Speech**: regional REST endpoint with SSML, neural voices
//!
//! Both implement [`tts::SpeechSynthesizer`], so the same
//! [`batch::AudioGenerator`] drives either one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use card_voice::batch::{AudioGenerator, Voices};
//! use card_voice::pricing::CharacterPricing;
//! use card_voice::progress::ConsoleProgress;
//! use card_voice::tts::OpenAiSpeech;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> card_voice::Result<()> {
//!     let client = OpenAiSpeech::builder().api_key("your-api-key").build()?;
//!     let summary = AudioGenerator::new(
//!         Arc::new(client),
//!         "public/audio",
//!         Voices::openai(),
//!         CharacterPricing::openai_tts_1(),
//!     )
//!     .with_progress(Arc::new(ConsoleProgress::new()))
//!     .run()
//!     .await?;
//!     assert_eq!(summary.generated + summary.failed, summary.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cards`] | Rank/suit/language tables, phrases and file names |
//! | [`tts`] | Synthesizer trait and provider clients |
//! | [`batch`] | The sequential batch generator |
//! | [`progress`] | Progress events and console output |
//! | [`pricing`] | Per-character cost estimation |
//! | [`config`] | Environment configuration |
//! | [`cli`] | Tracing setup and fatal-error reporting for the binaries |

pub mod batch;
pub mod cards;
pub mod cli;
pub mod config;
pub mod pricing;
pub mod progress;
pub mod tts;

pub use batch::{AudioGenerator, Summary};
pub use cards::{Card, Language, Rank, Suit};
pub use tts::SpeechSynthesizer;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
