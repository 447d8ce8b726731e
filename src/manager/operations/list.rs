use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::error::{Error, Result};

/// One direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

/// Trait for listing the immediate children of a directory.
pub trait Lister {
    /// List direct children with a file/directory tag. No recursion, no
    /// side effects.
    async fn list(&self, path: &Path) -> Result<Vec<Entry>>;
}

pub struct LocalLister;

impl Lister for LocalLister {
    async fn list(&self, path: &Path) -> Result<Vec<Entry>> {
        let meta = fs::metadata(path)
            .await
            .map_err(|e| Error::from_fs(e, path))?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut reader = fs::read_dir(path)
            .await
            .map_err(|e| Error::from_fs(e, path))?;

        let mut entries = Vec::new();
        while let Some(child) = reader
            .next_entry()
            .await
            .map_err(|e| Error::from_fs(e, path))?
        {
            // file_type() does not follow symlinks; a link counts as a file.
            let file_type = child
                .file_type()
                .await
                .map_err(|e| Error::from_fs(e, &child.path()))?;
            let kind = if file_type.is_dir() {
                EntryType::Directory
            } else {
                EntryType::File
            };
            entries.push(Entry {
                name: child.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[tokio::test]
    async fn classifies_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("report.pdf"), b"").unwrap();
        stdfs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        stdfs::create_dir(dir.path().join("archive")).unwrap();

        let entries = LocalLister.list(dir.path()).await.unwrap();
        assert_eq!(
            entries,
            vec![
                Entry {
                    name: "archive".into(),
                    kind: EntryType::Directory
                },
                Entry {
                    name: "notes.txt".into(),
                    kind: EntryType::File
                },
                Entry {
                    name: "report.pdf".into(),
                    kind: EntryType::File
                },
            ]
        );
    }

    #[tokio::test]
    async fn does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::create_dir(dir.path().join("outer")).unwrap();
        stdfs::write(dir.path().join("outer").join("inner.txt"), b"").unwrap();

        let entries = LocalLister.list(dir.path()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "outer");
    }

    #[tokio::test]
    async fn missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalLister
            .list(&dir.path().join("nowhere"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PathNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unreadable_directory_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        stdfs::create_dir(&locked).unwrap();
        stdfs::set_permissions(&locked, stdfs::Permissions::from_mode(0o000)).unwrap();

        // Privileged processes bypass mode bits; nothing to observe then.
        if stdfs::read_dir(&locked).is_ok() {
            stdfs::set_permissions(&locked, stdfs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = LocalLister.list(&locked).await;
        stdfs::set_permissions(&locked, stdfs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result.unwrap_err(), Error::PermissionDenied { .. }));
    }

    #[tokio::test]
    async fn file_path_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        stdfs::write(&file, b"").unwrap();
        let err = LocalLister.list(&file).await.unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }
}
