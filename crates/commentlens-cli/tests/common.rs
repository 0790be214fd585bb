//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BACKEND_RESPONSE: &str = r#"{
    "success": true,
    "think": [{"text": "Does the sequel use the same engine?", "likes": 12, "replies": 3}],
    "feel": [{"text": "This made my day", "likes": 40, "replies": 2}],
    "act": [],
    "pain_points": [{"text": "Audio is too quiet", "engagement": 7}],
    "language_patterns": [{"word": "engine", "count": 2}],
    "data": {
        "comments": [
            {"text": "He said \"wow\"", "author": "ana", "likes": 3, "timestamp": "2024-03-01T10:00:00Z"},
            {"text": "first", "author": "bo", "likes": 0, "timestamp": "2024-03-01T11:00:00Z"}
        ]
    },
    "request_id": "r-42"
}"#;

pub const QUOTA_RESPONSE: &str =
    r#"{"success": false, "error": "YouTube API quota exceeded"}"#;

pub struct TestFixture {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".commentlens");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Scratch directory next to the workspace; used as cwd for commands.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_payload(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write payload");
        path
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("commentlens").expect("Failed to find binary");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("COMMENTLENS_PATH")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(&self.data_dir);
        cmd
    }
}
