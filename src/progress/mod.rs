//! 进度报告模块：批量生成过程中的进度事件与输出目标。
//!
//! The generator reports every step as a [`ProgressEvent`] to a
//! [`ProgressSink`]. The binaries print them with [`ConsoleProgress`]; tests
//! record them with [`InMemoryProgress`].

mod console;

pub use console::ConsoleProgress;

use crate::batch::Summary;
use crate::cards::Language;
use crate::pricing::CostEstimate;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    BatchStarted {
        total: usize,
        output_dir: PathBuf,
        provider: String,
    },
    SectionStarted {
        language: Language,
    },
    Skipped {
        language: Language,
        file_name: String,
    },
    Generating {
        language: Language,
        file_name: String,
        text: String,
    },
    Generated {
        language: Language,
        file_name: String,
    },
    Failed {
        language: Language,
        file_name: String,
        error: String,
    },
    Finished {
        summary: Summary,
        output_dir: PathBuf,
        cost: CostEstimate,
    },
}

pub trait ProgressSink: Send + Sync {
    fn report(&self, event: &ProgressEvent);
}

pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&self, _: &ProgressEvent) {}
}

pub fn noop_progress() -> Arc<dyn ProgressSink> {
    Arc::new(NoopProgress)
}

/// In-memory sink for testing.
#[derive(Default)]
pub struct InMemoryProgress {
    events: RwLock<Vec<ProgressEvent>>,
}

impl InMemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.read().map(|e| e.clone()).unwrap_or_default()
    }
    pub fn len(&self) -> usize {
        self.events.read().map(|e| e.len()).unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProgressSink for InMemoryProgress {
    fn report(&self, event: &ProgressEvent) {
        if let Ok(mut events) = self.events.write() {
            events.push(event.clone());
        }
    }
}
