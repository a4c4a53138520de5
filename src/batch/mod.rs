//! 批量生成模块：遍历 52 张牌 × 2 种语言，跳过已存在的文件并调用 TTS 合成。
//!
//! # Batch Audio Generator
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`AudioGenerator`] | Sequential run over all jobs with skip/generate/fail tallies |
//! | [`AudioJob`] | One (language, card) item with phrase, voice and output path |
//! | [`Voices`] | Voice identifier per language |
//! | [`Summary`] | Final counts; `generated + failed == total` |
//!
//! The existence of an output file is the only cache marker. A run never
//! regenerates a file that is already there, even if the phrase or voice has
//! changed since it was written.

mod generator;
mod job;

pub use generator::{AudioGenerator, Summary};
pub use job::{plan_jobs, AudioJob, Voices};
