/// Persistence port for the chat mode toggle
///
/// The pipelines never touch this; the HTTP layer reads it when a request
/// does not name a mode and writes it when the user flips the toggle.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Mode,
};

#[async_trait::async_trait]
pub trait ModeStore: Send + Sync {
    async fn load(&self) -> AppResult<Mode>;

    async fn save(&self, mode: Mode) -> AppResult<()>;
}

/// Process-local store, lost on restart
#[derive(Default)]
pub struct InMemoryModeStore {
    mode: RwLock<Mode>,
}

impl InMemoryModeStore {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode: RwLock::new(mode),
        }
    }
}

#[async_trait::async_trait]
impl ModeStore for InMemoryModeStore {
    async fn load(&self) -> AppResult<Mode> {
        Ok(*self.mode.read().await)
    }

    async fn save(&self, mode: Mode) -> AppResult<()> {
        *self.mode.write().await = mode;
        Ok(())
    }
}

/// On-disk layout: a JSON object with the single boolean key `isMovieMode`
#[derive(Debug, Serialize, Deserialize)]
struct StoredMode {
    #[serde(rename = "isMovieMode", default)]
    is_movie_mode: bool,
}

/// JSON-file store; a missing file means the default (Anime) mode
///
/// Saves go to a sibling temp file that is renamed over the target, so a
/// concurrent `load` sees either the old or the new contents, never a
/// truncated file.
pub struct FileModeStore {
    path: PathBuf,
    // Serializes writers; they share one temp file
    write_lock: tokio::sync::Mutex<()>,
}

impl FileModeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "mode.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait::async_trait]
impl ModeStore for FileModeStore {
    async fn load(&self) -> AppResult<Mode> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No stored mode, using default");
                return Ok(Mode::default());
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredMode = serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(format!(
                "Corrupt mode file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Mode::from_movie_flag(stored.is_movie_mode))
    }

    async fn save(&self, mode: Mode) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let body = serde_json::to_string(&StoredMode {
            is_movie_mode: mode.is_movie_mode(),
        })
        .map_err(|e| AppError::Internal(format!("Failed to encode mode: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, body).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        tracing::info!(mode = ?mode, path = %self.path.display(), "Mode persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let store = InMemoryModeStore::default();
        assert_eq!(store.load().await.unwrap(), Mode::Anime);

        store.save(Mode::Media).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Mode::Media);
    }

    #[tokio::test]
    async fn test_missing_file_defaults_to_anime() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileModeStore::new(dir.path().join("mode.json"));

        assert_eq!(store.load().await.unwrap(), Mode::Anime);
    }

    #[tokio::test]
    async fn test_file_store_persists_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mode.json");

        FileModeStore::new(&path).save(Mode::Media).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"isMovieMode":true}"#);
        assert_eq!(FileModeStore::new(&path).load().await.unwrap(), Mode::Media);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mode.json");

        FileModeStore::new(&path).save(Mode::Anime).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("mode.json")]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_loads_during_saves_never_see_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileModeStore::new(dir.path().join("mode.json")));
        store.save(Mode::Anime).await.unwrap();

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..500 {
                    let mode = Mode::from_movie_flag(i % 2 == 0);
                    store.save(mode).await.unwrap();
                }
            })
        };
        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                let mut failures = 0;
                for _ in 0..500 {
                    if store.load().await.is_err() {
                        failures += 1;
                    }
                }
                failures
            })
        };

        writer.await.unwrap();
        assert_eq!(reader.await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mode.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileModeStore::new(&path).load().await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
