use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
pub struct MoveReport {
    pub destination: String,
    pub moved_count: usize,
}

/// Trait for moving selected entries into a destination directory.
pub trait Mover {
    /// Rename each named entry from `dir` into `destination`. Fail-fast: a
    /// failed rename aborts the batch (no cross-device fallback).
    async fn mv(&self, dir: &Path, names: &[String], destination: &Path) -> Result<usize>;
}

pub struct LocalMover;

impl Mover for LocalMover {
    async fn mv(&self, dir: &Path, names: &[String], destination: &Path) -> Result<usize> {
        let mut moved_count = 0;
        for name in names {
            let source = dir.join(name);
            let target = destination.join(name);
            fs::rename(&source, &target)
                .await
                .map_err(|e| Error::MoveFailed {
                    entry: name.clone(),
                    destination: destination.to_path_buf(),
                    source: Box::new(Error::from_fs(e, &source)),
                })?;
            moved_count += 1;
        }
        Ok(moved_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[tokio::test]
    async fn moves_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("a.txt"), b"alpha").unwrap();
        stdfs::create_dir(dir.path().join("b")).unwrap();
        stdfs::write(dir.path().join("b").join("inner.txt"), b"i").unwrap();

        let dest = dir.path().join("moved");
        stdfs::create_dir(&dest).unwrap();

        let count = LocalMover
            .mv(dir.path(), &["a.txt".into(), "b".into()], &dest)
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert!(!dir.path().join("a.txt").exists());
        assert!(!dir.path().join("b").exists());
        assert_eq!(stdfs::read(dest.join("a.txt")).unwrap(), b"alpha");
        assert!(dest.join("b").join("inner.txt").exists());
    }

    #[tokio::test]
    async fn missing_source_aborts_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("moved");
        stdfs::create_dir(&dest).unwrap();

        let err = LocalMover
            .mv(dir.path(), &["ghost".into()], &dest)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MoveFailed { entry, .. } if entry == "ghost"));
    }
}
