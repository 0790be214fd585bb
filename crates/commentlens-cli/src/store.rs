//! Keeps the most recent analysis payload in the workspace so `export` can
//! encode it after `render` has shown it.
//!
//! The payload is stored byte-for-byte as received; `stored_at` lives in a
//! sidecar file so the JSON export never carries fields the service did not send.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use commentlens_types::RawPayload;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const PAYLOAD_FILE: &str = "last_result.json";
const META_FILE: &str = "last_result.meta.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMeta {
    pub stored_at: DateTime<Utc>,
    pub bytes: usize,
}

pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn payload_path(&self) -> PathBuf {
        self.dir.join(PAYLOAD_FILE)
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }

    /// Replace the stored payload with `raw`.
    pub fn save(&self, raw: &[u8]) -> Result<StoredMeta> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create workspace {}", self.dir.display()))?;

        let meta = StoredMeta {
            stored_at: Utc::now(),
            bytes: raw.len(),
        };

        write_file(&self.payload_path(), raw)?;
        write_file(&self.meta_path(), &serde_json::to_vec_pretty(&meta)?)?;

        debug!(path = %self.payload_path().display(), bytes = raw.len(), "stored payload");
        Ok(meta)
    }

    /// The stored payload, or `None` when nothing was rendered yet.
    pub fn load(&self) -> Result<Option<RawPayload>> {
        let path = self.payload_path();
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let payload = RawPayload::from_slice(&raw)
            .with_context(|| format!("Stored result {} is corrupt", path.display()))?;
        Ok(Some(payload))
    }

    /// When the stored payload was saved; `None` if nothing was stored.
    pub fn meta(&self) -> Result<Option<StoredMeta>> {
        let path = self.meta_path();
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read(&path)?;
        Ok(Some(serde_json::from_slice(&raw)?))
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_store_has_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = ResultStore::new(temp_dir.path());
        assert!(store.load()?.is_none());
        assert!(store.meta()?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_keeps_raw_bytes() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = ResultStore::new(temp_dir.path().join("ws"));
        let raw = br#"{"think":[{"text":"hm"}],"request_id":"r1"}"#;

        let meta = store.save(raw)?;
        assert_eq!(meta.bytes, raw.len());
        assert_eq!(std::fs::read(store.payload_path())?, raw.to_vec());

        let payload = store.load()?.unwrap();
        assert_eq!(payload.payload().think[0].text, "hm");
        assert_eq!(payload.raw()["request_id"], "r1");
        assert_eq!(store.meta()?.unwrap(), meta);
        Ok(())
    }

    #[test]
    fn test_save_replaces_previous_payload() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = ResultStore::new(temp_dir.path());
        store.save(br#"{"feel":[{"text":"old"}]}"#)?;
        store.save(br#"{"feel":[{"text":"new"}]}"#)?;
        assert_eq!(store.load()?.unwrap().payload().feel[0].text, "new");
        Ok(())
    }
}
