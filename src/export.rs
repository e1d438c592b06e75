//! Export the knowledge base as a JSON snapshot.
//!
//! The snapshot is a write-only dump of every bucket. An existing file at
//! the target path is overwritten.

use anyhow::{Context, Result};
use apiref_core::{snapshot, KnowledgeBase};
use std::path::Path;

pub fn write_snapshot(kb: &KnowledgeBase, path: &Path) -> Result<()> {
    let json = snapshot::to_json(kb)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, &json)
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;

    tracing::info!(path = %path.display(), records = kb.len(), "snapshot written");
    Ok(())
}

pub fn run_export(kb: &KnowledgeBase, output: &Path) -> Result<()> {
    write_snapshot(kb, output)?;
    eprintln!("Exported {} APIs to {}", kb.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/kb.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale contents that are longer than the snapshot?").unwrap();

        write_snapshot(&KnowledgeBase::new(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 9);
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/kb.json");
        write_snapshot(&KnowledgeBase::new(), &path).unwrap();
        assert!(path.exists());
    }
}
