//! File-based progress store
//!
//! This module provides a file-based implementation of the ProgressStorePort,
//! persisting the opaque progress value to a local JSON file. Every access
//! waits a fixed latency first, so feedback screens shown alongside storage
//! calls stay visible.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use sf_core::ports::ProgressStorePort;
use sf_core::{ErrorSignal, Progress, ProgressToken};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub const DEFAULT_PROGRESS_FILE: &str = ".user_progress";

pub struct FileProgressStore {
    progress_file_path: PathBuf,
    latency: Duration,
}

impl FileProgressStore {
    /// Create store with custom file path and no latency
    pub fn new(progress_file_path: PathBuf) -> Self {
        Self {
            progress_file_path,
            latency: Duration::ZERO,
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_PROGRESS_FILE))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn path(&self) -> &Path {
        &self.progress_file_path
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn read_progress(&self) -> anyhow::Result<Option<Progress>> {
        let content = match fs::read_to_string(&self.progress_file_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read {}", self.progress_file_path.display())
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let progress = serde_json::from_str(&content).context("Failed to parse progress")?;
        Ok(Some(progress))
    }

    async fn write_progress(&self, progress: &Progress) -> anyhow::Result<()> {
        if let Some(parent) = self.progress_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create progress directory")?;
        }

        let json = serde_json::to_string_pretty(progress).context("Failed to serialize progress")?;

        let mut file = fs::File::create(&self.progress_file_path)
            .await
            .context("Failed to create progress file")?;
        file.write_all(json.as_bytes())
            .await
            .context("Failed to write progress file")?;
        file.sync_all()
            .await
            .context("Failed to sync progress file")?;

        Ok(())
    }

    async fn remove_progress(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.progress_file_path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).context("Failed to remove progress file"),
        }
    }
}

#[async_trait]
impl ProgressStorePort for FileProgressStore {
    async fn load(&self) -> ProgressToken {
        self.wait().await;
        match self.read_progress().await {
            Ok(progress) => {
                debug!(present = progress.is_some(), "progress loaded");
                progress.into()
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "progress store unreadable");
                ProgressToken::Unreadable
            }
        }
    }

    async fn save(&self, progress: &Progress) -> Result<(), ErrorSignal> {
        self.wait().await;
        self.write_progress(progress).await.map_err(|err| {
            warn!(error = %format!("{err:#}"), "progress save failed");
            ErrorSignal::StorageUnreadable
        })
    }

    async fn delete(&self) -> Result<(), ErrorSignal> {
        self.wait().await;
        self.remove_progress().await.map_err(|err| {
            warn!(error = %format!("{err:#}"), "progress delete failed");
            ErrorSignal::StorageUnreadable
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_returns_absent_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(temp_dir.path().join("missing.json"));

        assert_eq!(store.load().await, ProgressToken::Absent);
    }

    #[tokio::test]
    async fn save_then_load_returns_saved_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::with_defaults(temp_dir.path().to_path_buf());

        store.save(&Progress::initial()).await.unwrap();

        assert_eq!(
            store.load().await,
            ProgressToken::Present(Progress::initial())
        );
        assert!(temp_dir.path().join(DEFAULT_PROGRESS_FILE).exists());
    }

    #[tokio::test]
    async fn save_replaces_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(temp_dir.path().join("progress.json"));

        store.save(&Progress::initial()).await.unwrap();
        store
            .save(&Progress::new(json!({ "onboarded": true, "visits": 2 })))
            .await
            .unwrap();

        match store.load().await {
            ProgressToken::Present(progress) => assert_eq!(progress.value()["visits"], 2),
            other => panic!("expected stored progress, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        std::fs::write(&path, "  \n").unwrap();
        let store = FileProgressStore::new(path);

        assert_eq!(store.load().await, ProgressToken::Absent);
    }

    #[tokio::test]
    async fn corrupt_file_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = FileProgressStore::new(path);

        assert_eq!(store.load().await, ProgressToken::Unreadable);
    }

    #[tokio::test]
    async fn directory_in_place_of_file_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.load().await, ProgressToken::Unreadable);
        assert_eq!(
            store.save(&Progress::initial()).await,
            Err(ErrorSignal::StorageUnreadable)
        );
    }

    #[tokio::test]
    async fn delete_removes_saved_progress() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(temp_dir.path().join("progress.json"));

        store.save(&Progress::initial()).await.unwrap();
        store.delete().await.unwrap();

        assert_eq!(store.load().await, ProgressToken::Absent);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn delete_without_progress_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(temp_dir.path().join("progress.json"));

        assert_eq!(store.delete().await, Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn every_access_waits_for_latency() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(temp_dir.path().join("progress.json"))
            .with_latency(Duration::from_millis(500));

        let started = tokio::time::Instant::now();
        store.load().await;
        store.save(&Progress::initial()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
