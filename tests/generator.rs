//! Batch generator behavior against a recording synthesizer.

mod common;

use card_voice::batch::{AudioGenerator, Voices};
use card_voice::pricing::CharacterPricing;
use card_voice::progress::{InMemoryProgress, ProgressEvent};
use card_voice::Language;
use common::{file_count, RecordingSynthesizer};
use std::sync::Arc;

fn generator(synth: Arc<RecordingSynthesizer>, dir: &std::path::Path) -> AudioGenerator {
    AudioGenerator::new(synth, dir, Voices::openai(), CharacterPricing::openai_tts_1())
}

#[tokio::test]
async fn test_first_run_synthesizes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public").join("audio");
    let synth = Arc::new(RecordingSynthesizer::new());

    let summary = generator(synth.clone(), &out).run().await.unwrap();

    assert_eq!(summary.total, 104);
    assert_eq!(summary.generated, 104);
    assert_eq!(summary.failed, 0);
    assert_eq!(synth.call_count(), 104);
    assert_eq!(file_count(&out), 104);
    assert_eq!(
        std::fs::read(out.join("es_10_clubs.mp3")).unwrap(),
        "audio:Diez de Tréboles".as_bytes()
    );
}

#[tokio::test]
async fn test_second_run_makes_no_calls() {
    let dir = tempfile::tempdir().unwrap();
    let first = Arc::new(RecordingSynthesizer::new());
    generator(first, dir.path()).run().await.unwrap();

    let second = Arc::new(RecordingSynthesizer::new());
    let summary = generator(second.clone(), dir.path()).run().await.unwrap();

    assert_eq!(second.call_count(), 0);
    assert_eq!(summary.generated, 104);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn test_only_missing_files_are_synthesized() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en_A_spades.mp3"), b"old").unwrap();
    std::fs::write(dir.path().join("es_K_clubs.mp3"), b"old").unwrap();
    let synth = Arc::new(RecordingSynthesizer::new());

    let summary = generator(synth.clone(), dir.path()).run().await.unwrap();

    assert_eq!(synth.call_count(), 102);
    assert_eq!(summary.generated, 104);
    // Existing files are never refreshed.
    assert_eq!(std::fs::read(dir.path().join("en_A_spades.mp3")).unwrap(), b"old");
    assert!(synth
        .calls()
        .iter()
        .all(|(_, _, name)| name != "en_A_spades.mp3" && name != "es_K_clubs.mp3"));
}

#[tokio::test]
async fn test_failures_are_counted_and_do_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let synth = Arc::new(RecordingSynthesizer::failing_on([
        "en_Q_hearts.mp3",
        "es_2_diamonds.mp3",
    ]));
    let progress = Arc::new(InMemoryProgress::new());

    let summary = generator(synth.clone(), dir.path())
        .with_progress(progress.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(synth.call_count(), 104);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.generated, 102);
    assert_eq!(summary.generated + summary.failed, summary.total);
    assert!(!dir.path().join("en_Q_hearts.mp3").exists());
    assert_eq!(file_count(dir.path()), 102);

    let failed: Vec<_> = progress
        .events()
        .into_iter()
        .filter_map(|e| match e {
            ProgressEvent::Failed {
                file_name, error, ..
            } => Some((file_name, error)),
            _ => None,
        })
        .collect();
    assert_eq!(failed.len(), 2);
    assert_eq!(failed[0].0, "en_Q_hearts.mp3");
    assert!(failed[0].1.contains("503"));
}

#[tokio::test]
async fn test_calls_follow_language_suit_rank_order() {
    let dir = tempfile::tempdir().unwrap();
    let synth = Arc::new(RecordingSynthesizer::new());
    AudioGenerator::new(
        synth.clone(),
        dir.path(),
        Voices::azure(),
        CharacterPricing::azure_neural(),
    )
    .run()
    .await
    .unwrap();

    let calls = synth.calls();
    assert_eq!(
        calls[0],
        (
            "A of Spades".to_string(),
            "en-US-JennyNeural".to_string(),
            "en_A_spades.mp3".to_string()
        )
    );
    assert_eq!(calls[1].2, "en_2_spades.mp3");
    assert_eq!(calls[13].2, "en_A_hearts.mp3");
    assert_eq!(
        calls[52],
        (
            "As de Picas".to_string(),
            "es-ES-ElviraNeural".to_string(),
            "es_A_spades.mp3".to_string()
        )
    );
    assert_eq!(calls[103].0, "Rey de Tréboles");
}

#[tokio::test]
async fn test_progress_sections_and_cost() {
    let dir = tempfile::tempdir().unwrap();
    let synth = Arc::new(RecordingSynthesizer::new());
    let progress = Arc::new(InMemoryProgress::new());

    let summary = generator(synth, dir.path())
        .with_progress(progress.clone())
        .run()
        .await
        .unwrap();

    let events = progress.events();
    let sections: Vec<Language> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::SectionStarted { language } => Some(*language),
            _ => None,
        })
        .collect();
    assert_eq!(sections, vec![Language::English, Language::Spanish]);
    assert!(matches!(
        events.first(),
        Some(ProgressEvent::BatchStarted { total: 104, .. })
    ));

    let expected_chars: usize = card_voice::batch::plan_jobs(dir.path(), &Voices::openai())
        .iter()
        .map(|j| j.text.chars().count())
        .sum();
    assert_eq!(summary.characters, expected_chars);
    match events.last() {
        Some(ProgressEvent::Finished { cost, summary: s, .. }) => {
            assert_eq!(s, &summary);
            let expected = (expected_chars as f64 / 1_000_000.0) * 15.0;
            assert!((cost.total_cost - expected).abs() < 1e-12);
            assert_eq!(cost.format(), format!("${:.4}", expected));
        }
        other => panic!("unexpected last event: {other:?}"),
    }
}
