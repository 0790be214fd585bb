use anyhow::{Context, Result};
use std::io::Read;

/// Read raw payload bytes from a file path, or from stdin when `source` is `-`.
pub fn read_source(source: &str) -> Result<Vec<u8>> {
    if source == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read payload from stdin")?;
        return Ok(buf);
    }

    std::fs::read(source).with_context(|| format!("Failed to read payload {}", source))
}
