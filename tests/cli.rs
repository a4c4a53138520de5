//! End-to-end checks of the generator binaries' fatal path.

use std::process::Command;

fn run_in_empty_dir(bin: &str, envs: &[(&str, &str)]) -> (std::process::Output, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(bin)
        .current_dir(dir.path())
        .env_clear()
        .envs(envs.iter().copied())
        .output()
        .expect("failed to spawn generator binary");
    (output, dir)
}

#[test]
fn test_openai_without_key_exits_nonzero_and_creates_nothing() {
    let (output, dir) = run_in_empty_dir(env!("CARGO_BIN_EXE_generate-audio"), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY not found"));
    assert!(stderr.contains("export OPENAI_API_KEY"));
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_azure_without_region_exits_nonzero_and_creates_nothing() {
    let (output, dir) = run_in_empty_dir(
        env!("CARGO_BIN_EXE_generate-audio-azure"),
        &[("AZURE_SPEECH_KEY", "key")],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AZURE_SPEECH_REGION not found"));
    assert!(stderr.contains("Common regions"));
    assert!(!dir.path().join("public").exists());
}
