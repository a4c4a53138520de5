//! Persisting synthesized audio.

use crate::{Error, ErrorContext, Result};
use std::path::{Path, PathBuf};

/// Write `data` to `path` through a sibling `.part` file and a rename.
///
/// Readers never observe a half-written `.mp3`, and a failed write removes the
/// temporary file.
pub async fn write_audio(path: &Path, data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::runtime_with_context(
            "Provider returned no audio",
            ErrorContext::new().with_field_path(display_name(path)),
        ));
    }
    let tmp = part_path(path);
    if let Err(e) = tokio::fs::write(&tmp, data).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), bytes = data.len(), "audio written");
    Ok(())
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_audio_leaves_no_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en_A_spades.mp3");
        write_audio(&path, b"ID3audio").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"ID3audio");
        assert!(!dir.path().join("en_A_spades.mp3.part").exists());
    }

    #[tokio::test]
    async fn test_empty_audio_is_rejected_without_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("es_K_clubs.mp3");
        let err = write_audio(&path, &[]).await.unwrap_err();

        assert!(matches!(err, Error::Runtime { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_part_path_is_sibling() {
        let p = part_path(Path::new("/tmp/audio/en_10_hearts.mp3"));
        assert_eq!(p, Path::new("/tmp/audio/en_10_hearts.mp3.part"));
    }
}
