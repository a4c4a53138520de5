//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use card_voice::tts::{write_audio, SpeechSynthesizer};
use card_voice::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

/// Synthesizer that writes fake audio and records every call.
#[derive(Default)]
pub struct RecordingSynthesizer {
    calls: Mutex<Vec<(String, String, String)>>,
    fail_on: HashSet<String>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call whose output file name is listed.
    pub fn failing_on<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: names.into_iter().map(Into::into).collect(),
        }
    }

    /// (text, voice, file name) per call, in order.
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn synthesize(&self, text: &str, voice: &str, output: &Path) -> Result<()> {
        let file_name = output
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), voice.to_string(), file_name.clone()));
        if self.fail_on.contains(&file_name) {
            return Err(Error::Remote {
                status: 503,
                message: "service unavailable".into(),
            });
        }
        write_audio(output, format!("audio:{text}").as_bytes()).await
    }
}

/// Number of regular files in `dir`.
pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.flatten().filter(|e| e.path().is_file()).count())
        .unwrap_or(0)
}
