//! Generate the 104 card announcements with Azure Speech neural voices.
//!
//! Usage:
//!   generate-audio-azure
//!
//! Reads AZURE_SPEECH_KEY and AZURE_SPEECH_REGION (and the optional
//! CARD_AUDIO_* settings) from the environment or a .env file.

use anyhow::Context;
use card_voice::batch::AudioGenerator;
use card_voice::cli;
use card_voice::config::AzureConfig;
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
    let config = AzureConfig::from_env()?;
    let client = config.build_client()?;
    let progress = ConsoleProgress::new()
        .with_provider_label("Azure Speech Services")
        .with_note(format!("Region: {}", client.region()))
        .with_detailed_cost(true);

    let generator = AudioGenerator::new(
        Arc::new(client),
        config.output.output_dir.clone(),
        config.output.voices.clone(),
        config.pricing(),
    )
    .with_progress(Arc::new(progress));
    generator.run().await.with_context(|| {
        format!(
            "cannot prepare output directory {}",
            config.output.output_dir.display()
        )
    })?;
    Ok(())
}
