//! Generate the 104 card announcements with OpenAI text-to-speech.
//!
//! Usage:
//!   generate-audio
//!
//! Reads OPENAI_API_KEY (and the optional CARD_AUDIO_* settings) from the
//! environment or a .env file and writes public/audio/{lang}_{rank}_{suit}.mp3.

use anyhow::Context;
use card_voice::batch::AudioGenerator;
use card_voice::cli;
use card_voice::config::OpenAiConfig;
use card_voice::progress::ConsoleProgress;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    cli::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => cli::exit_with(&e),
    }
}

async fn run() -> anyhow::Result<()> {
    let config = OpenAiConfig::from_env()?;
    let client = config.build_client()?;
    tracing::info!(model = client.model(), "using OpenAI speech");

    let generator = AudioGenerator::new(
        Arc::new(client),
        config.output.output_dir.clone(),
        config.output.voices.clone(),
        config.pricing(),
    )
    .with_progress(Arc::new(ConsoleProgress::new()));
    generator.run().await.with_context(|| {
        format!(
            "cannot prepare output directory {}",
            config.output.output_dir.display()
        )
    })?;
    Ok(())
}
