//! The fixed 104-item work list.

use crate::cards::{deck, Card, Language};
use std::path::{Path, PathBuf};

/// Voice identifier per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voices {
    pub english: String,
    pub spanish: String,
}

impl Voices {
    pub fn new(english: impl Into<String>, spanish: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            spanish: spanish.into(),
        }
    }

    /// `nova` for both languages.
    pub fn openai() -> Self {
        Self::new("nova", "nova")
    }

    /// Jenny (en-US) and Elvira (es-ES) neural voices.
    pub fn azure() -> Self {
        Self::new("en-US-JennyNeural", "es-ES-ElviraNeural")
    }

    pub fn for_language(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Spanish => &self.spanish,
        }
    }
}

/// One (language, card) item of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioJob {
    pub language: Language,
    pub card: Card,
    pub text: String,
    pub voice: String,
    pub file_name: String,
    pub path: PathBuf,
}

impl AudioJob {
    pub fn new(language: Language, card: Card, voices: &Voices, output_dir: &Path) -> Self {
        let file_name = language.file_name(&card);
        Self {
            language,
            card,
            text: language.phrase(&card),
            voice: voices.for_language(language).to_string(),
            path: output_dir.join(&file_name),
            file_name,
        }
    }

    /// Billable length of the phrase.
    pub fn characters(&self) -> usize {
        self.text.chars().count()
    }
}

/// Every job in processing order: languages, then suits, then ranks.
pub fn plan_jobs(output_dir: &Path, voices: &Voices) -> Vec<AudioJob> {
    Language::ALL
        .iter()
        .flat_map(|&language| {
            deck().map(move |card| AudioJob::new(language, card, voices, output_dir))
        })
        .collect()
}
