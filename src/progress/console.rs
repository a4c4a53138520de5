//! Console output in the style of the card-table tooling: emoji markers,
//! English section first, then Spanish.

use super::{ProgressEvent, ProgressSink};
use crate::cards::Language;

const RULE_WIDTH: usize = 60;

/// Prints progress to stdout.
pub struct ConsoleProgress {
    provider_label: Option<String>,
    notes: Vec<String>,
    detailed_cost: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            provider_label: None,
            notes: Vec::new(),
            detailed_cost: false,
        }
    }
    /// Appended to the opening line: "Generating 104 audio files using {label}...".
    pub fn with_provider_label(mut self, label: impl Into<String>) -> Self {
        self.provider_label = Some(label.into());
        self
    }
    /// Extra line printed under the output directory, e.g. "Region: eastus".
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
    /// Show the pricing tier next to the estimated cost.
    pub fn with_detailed_cost(mut self, detailed: bool) -> Self {
        self.detailed_cost = detailed;
        self
    }

    /// The line(s) an event produces, without the trailing newline.
    pub fn render(&self, event: &ProgressEvent) -> String {
        match event {
            ProgressEvent::BatchStarted {
                total, output_dir, ..
            } => {
                let mut lines = vec![match &self.provider_label {
                    Some(label) => format!("Generating {} audio files using {}...", total, label),
                    None => format!("Generating {} audio files...", total),
                }];
                lines.push(format!("Output directory: {}", output_dir.display()));
                lines.extend(self.notes.iter().cloned());
                lines.push("-".repeat(RULE_WIDTH));
                lines.join("\n")
            }
            ProgressEvent::SectionStarted { language } => match language {
                Language::English => "\n📢 Generating English audio files...".to_string(),
                Language::Spanish => "\n📢 Generando archivos de audio en español...".to_string(),
            },
            ProgressEvent::Skipped {
                language,
                file_name,
            } => match language {
                Language::English => format!("⏭️  Skipping {} (already exists)", file_name),
                Language::Spanish => format!("⏭️  Omitiendo {} (ya existe)", file_name),
            },
            ProgressEvent::Generating {
                language,
                file_name,
                text,
            } => match language {
                Language::English => format!("🎤 Generating: {} - '{}'", file_name, text),
                Language::Spanish => format!("🎤 Generando: {} - '{}'", file_name, text),
            },
            ProgressEvent::Generated {
                language,
                file_name,
            } => match language {
                Language::English => format!("✅ Created: {}", file_name),
                Language::Spanish => format!("✅ Creado: {}", file_name),
            },
            ProgressEvent::Failed {
                file_name, error, ..
            } => format!("❌ Error generating {}: {}", file_name, error),
            ProgressEvent::Finished {
                summary,
                output_dir,
                cost,
            } => {
                let rule = "=".repeat(RULE_WIDTH);
                let mut lines = vec![
                    format!("\n{}", rule),
                    "✨ Generation complete!".to_string(),
                    format!(
                        "✅ Successfully generated: {}/{}",
                        summary.generated, summary.total
                    ),
                ];
                if summary.failed > 0 {
                    lines.push(format!("❌ Failed: {}", summary.failed));
                }
                lines.push(format!("📁 Files saved to: {}", output_dir.display()));
                lines.push(rule);
                let cost = if self.detailed_cost {
                    cost.format_detailed()
                } else {
                    cost.format()
                };
                lines.push(format!("\n💰 Estimated cost: {}", cost));
                lines.join("\n")
            }
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&self, event: &ProgressEvent) {
        println!("{}", self.render(event));
    }
}
