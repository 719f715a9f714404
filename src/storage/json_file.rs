use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Where a loaded value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the storage file.
    File,
    /// No storage file existed; the default was used.
    Missing,
    /// The file existed but could not be read or parsed; the default was used.
    Malformed,
}

/// Result of reading a storage file.
///
/// Reading never fails from the caller's point of view: a missing or broken
/// file is reported here and callers pick a default via [`LoadOutcome::or_default_with`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Missing,
    Malformed(String),
}

impl<T> LoadOutcome<T> {
    pub fn source(&self) -> LoadSource {
        match self {
            LoadOutcome::Loaded(_) => LoadSource::File,
            LoadOutcome::Missing => LoadSource::Missing,
            LoadOutcome::Malformed(_) => LoadSource::Malformed,
        }
    }

    /// Apply a shape check to a loaded value. A rejected value becomes `Malformed`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, String>) -> LoadOutcome<U> {
        match self {
            LoadOutcome::Loaded(value) => match f(value) {
                Ok(v) => LoadOutcome::Loaded(v),
                Err(reason) => LoadOutcome::Malformed(reason),
            },
            LoadOutcome::Missing => LoadOutcome::Missing,
            LoadOutcome::Malformed(reason) => LoadOutcome::Malformed(reason),
        }
    }

    /// Collapse to a value, substituting the default on `Missing` or `Malformed`.
    pub fn or_default_with(self, default: impl FnOnce() -> T) -> T {
        match self {
            LoadOutcome::Loaded(value) => value,
            LoadOutcome::Missing | LoadOutcome::Malformed(_) => default(),
        }
    }
}

/// Output layout used when writing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Compact,
    /// Two-space indentation.
    Pretty,
}

/// A single JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    layout: Layout,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document.
    pub async fn load<T: DeserializeOwned>(&self) -> LoadOutcome<T> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist, using default", self.path.display());
                return LoadOutcome::Missing;
            }
            Err(e) => {
                let reason = format!("failed to read {}: {}", self.path.display(), e);
                log::warn!("{}", reason);
                return LoadOutcome::Malformed(reason);
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => {
                log::debug!("Loaded {}", self.path.display());
                LoadOutcome::Loaded(value)
            }
            Err(e) => {
                let reason = format!("invalid JSON in {}: {}", self.path.display(), e);
                log::warn!("{}", reason);
                LoadOutcome::Malformed(reason)
            }
        }
    }

    /// Serialize the value and overwrite the document in a single write.
    pub async fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = match self.layout {
            Layout::Compact => serde_json::to_string(value),
            Layout::Pretty => serde_json::to_string_pretty(value),
        }
        .context("Failed to serialize document")?;

        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::debug!("Saved {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("none.json"), Layout::Compact);

        let outcome: LoadOutcome<Vec<u32>> = file.load().await;
        assert_eq!(outcome, LoadOutcome::Missing);
        assert_eq!(outcome.source(), LoadSource::Missing);
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let outcome: LoadOutcome<Vec<u32>> = JsonFile::new(&path, Layout::Compact).load().await;
        assert_eq!(outcome.source(), LoadSource::Malformed);
        assert_eq!(outcome.or_default_with(|| vec![7]), vec![7]);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("data.json"), Layout::Pretty);

        file.save(&vec![1, 2]).await.unwrap();
        let raw = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(raw, "[\n  1,\n  2\n]");

        let outcome: LoadOutcome<Vec<u32>> = file.load().await;
        assert_eq!(outcome, LoadOutcome::Loaded(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("nope").join("data.json"), Layout::Compact);

        let err = file.save(&1).await.unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }

    #[test]
    fn test_and_then_rejects_shape() {
        let outcome = LoadOutcome::Loaded(-1i32).and_then(|v| {
            if v < 0 {
                Err("negative".to_string())
            } else {
                Ok(v)
            }
        });
        assert_eq!(outcome, LoadOutcome::Malformed("negative".into()));
    }
}
