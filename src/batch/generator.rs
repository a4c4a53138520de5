//! Batch audio generator.

use super::job::{plan_jobs, AudioJob, Voices};
use crate::pricing::CharacterPricing;
use crate::progress::{noop_progress, ProgressEvent, ProgressSink};
use crate::tts::SpeechSynthesizer;
use crate::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Files present at the end of the run, whether skipped or newly written.
    pub generated: usize,
    pub failed: usize,
    pub total: usize,
    /// Sum of phrase lengths over every job, used for the cost estimate.
    pub characters: usize,
}

impl Summary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.generated as f64 / self.total as f64
        }
    }
}

pub struct AudioGenerator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    output_dir: PathBuf,
    voices: Voices,
    pricing: CharacterPricing,
    progress: Arc<dyn ProgressSink>,
}

impl AudioGenerator {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        output_dir: impl Into<PathBuf>,
        voices: Voices,
        pricing: CharacterPricing,
    ) -> Self {
        Self {
            synthesizer,
            output_dir: output_dir.into(),
            voices,
            pricing,
            progress: noop_progress(),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn jobs(&self) -> Vec<AudioJob> {
        plan_jobs(&self.output_dir, &self.voices)
    }

    /// Create the output directory, then process every job in order.
    ///
    /// Item failures are tallied and never stop the run; only a failure to
    /// create the output directory is returned as an error.
    pub async fn run(&self) -> Result<Summary> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let start = Instant::now();
        let jobs = self.jobs();
        let mut summary = Summary {
            total: jobs.len(),
            characters: jobs.iter().map(AudioJob::characters).sum(),
            ..Summary::default()
        };

        self.progress.report(&ProgressEvent::BatchStarted {
            total: summary.total,
            output_dir: self.output_dir.clone(),
            provider: self.synthesizer.name().to_string(),
        });

        let mut section = None;
        for job in &jobs {
            if section != Some(job.language) {
                section = Some(job.language);
                self.progress.report(&ProgressEvent::SectionStarted {
                    language: job.language,
                });
            }
            if self.process(job).await {
                summary.generated += 1;
            } else {
                summary.failed += 1;
            }
        }

        let cost = self.pricing.estimate(summary.characters);
        tracing::info!(
            provider = self.synthesizer.name(),
            generated = summary.generated,
            failed = summary.failed,
            total = summary.total,
            estimated_cost = cost.total_cost,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "audio batch finished"
        );
        self.progress.report(&ProgressEvent::Finished {
            summary,
            output_dir: self.output_dir.clone(),
            cost,
        });
        Ok(summary)
    }

    /// Returns whether the job's file exists afterwards.
    async fn process(&self, job: &AudioJob) -> bool {
        if tokio::fs::try_exists(&job.path).await.unwrap_or(false) {
            tracing::debug!(file = %job.file_name, "skipping existing file");
            self.progress.report(&ProgressEvent::Skipped {
                language: job.language,
                file_name: job.file_name.clone(),
            });
            return true;
        }

        self.progress.report(&ProgressEvent::Generating {
            language: job.language,
            file_name: job.file_name.clone(),
            text: job.text.clone(),
        });
        match self
            .synthesizer
            .synthesize(&job.text, &job.voice, &job.path)
            .await
        {
            Ok(()) => {
                self.progress.report(&ProgressEvent::Generated {
                    language: job.language,
                    file_name: job.file_name.clone(),
                });
                true
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.synthesizer.name(),
                    file = %job.file_name,
                    error = %e,
                    "speech synthesis failed"
                );
                self.progress.report(&ProgressEvent::Failed {
                    language: job.language,
                    file_name: job.file_name.clone(),
                    error: e.to_string(),
                });
                false
            }
        }
    }
}
