use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::error::{Error, Result};
use crate::manager::selection::Selection;

/// Outcome of one deletion batch. `success` is true only when every selected
/// entry was removed; partial failure is the normal case, not an error.
#[derive(Debug, Serialize)]
pub struct DeletionReport {
    pub success: bool,
    pub deleted_count: usize,
    pub errors: Vec<DeletionError>,
}

#[derive(Debug, Serialize)]
pub struct DeletionError {
    pub entry: String,
    pub message: String,
}

/// Trait for deleting the selected entries of a directory.
pub trait Deleter {
    /// Attempt removal of every selected name exactly once, resolving each
    /// against `dir`. Successful names leave the selection; failed names
    /// stay selected so the caller can retry or inspect.
    async fn delete(&self, dir: &Path, selection: &mut Selection) -> DeletionReport;
}

pub struct LocalDeleter;

impl Deleter for LocalDeleter {
    async fn delete(&self, dir: &Path, selection: &mut Selection) -> DeletionReport {
        let mut deleted_count = 0;
        let mut errors = Vec::new();

        for name in selection.get() {
            let path = dir.join(&name);
            match remove_entry(&path).await {
                Ok(()) => {
                    deleted_count += 1;
                    selection.remove(&name);
                }
                Err(e) => {
                    log::debug!("delete failed entry={name} error={e}");
                    errors.push(DeletionError {
                        entry: name,
                        message: e.to_string(),
                    });
                }
            }
        }

        DeletionReport {
            success: errors.is_empty(),
            deleted_count,
            errors,
        }
    }
}

/// Remove a single filesystem entry, recursively for directories. Symlinks
/// are unlinked, never followed.
async fn remove_entry(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path)
        .await
        .map_err(|e| Error::from_fs(e, path))?;
    if meta.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    }
    .map_err(|e| Error::from_fs(e, path))
}
