use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{Error, Result};

pub mod naming;
mod operations;
pub mod selection;

use self::operations::copy::LocalCopier;
use self::operations::delete::LocalDeleter;
use self::operations::list::LocalLister;
use self::operations::mv::LocalMover;
use self::operations::{Copier, Deleter, Lister, Mover};

pub use self::operations::copy::CopyReport;
pub use self::operations::delete::{DeletionError, DeletionReport};
pub use self::operations::list::{Entry, EntryType};
pub use self::operations::mv::MoveReport;
pub use self::selection::{ParsedAction, Selection, SelectionAction, parse_action};

/// Facade over the per-operation implementations for the local filesystem.
#[derive(Clone, Copy, Default)]
pub struct FileManager;

impl FileManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_directory(&self, path: &Path) -> Result<Vec<Entry>> {
        log::debug!("list_directory path={}", path.display());
        let lister = LocalLister;
        lister.list(path).await.map_err(|e| match e {
            e @ (Error::PathNotFound { .. }
            | Error::NotADirectory { .. }
            | Error::PermissionDenied { .. }) => e,
            other => Error::ListDirectoryFailed {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        })
    }

    /// Delete every selected entry under `dir`. Per-entry failures land in
    /// the report, never in an `Err`.
    pub async fn delete_selection(&self, dir: &Path, selection: &mut Selection) -> DeletionReport {
        log::debug!(
            "delete_selection dir={} selected={}",
            dir.display(),
            selection.len()
        );
        let deleter = LocalDeleter;
        deleter.delete(dir, selection).await
    }

    /// Copy the selected entries into `destination` (generated under `dir`
    /// when omitted). The selection is left untouched.
    pub async fn copy_selection(
        &self,
        dir: &Path,
        selection: &Selection,
        destination: Option<String>,
    ) -> Result<CopyReport> {
        log::debug!(
            "copy_selection dir={} selected={} destination={:?}",
            dir.display(),
            selection.len(),
            destination
        );
        let destination = resolve_destination(dir, destination).await?;
        let copier = LocalCopier;
        let copied_count = copier.copy(dir, &selection.get(), &destination).await?;
        Ok(CopyReport {
            destination: destination.to_string_lossy().into_owned(),
            copied_count,
        })
    }

    /// Move the selected entries into `destination` (generated under `dir`
    /// when omitted). Moved names are cleared from the selection.
    pub async fn move_selection(
        &self,
        dir: &Path,
        selection: &mut Selection,
        destination: Option<String>,
    ) -> Result<MoveReport> {
        log::debug!(
            "move_selection dir={} selected={} destination={:?}",
            dir.display(),
            selection.len(),
            destination
        );
        let destination = resolve_destination(dir, destination).await?;
        let names = selection.get();
        let mover = LocalMover;
        let moved_count = mover.mv(dir, &names, &destination).await?;
        for name in &names {
            selection.remove(name);
        }
        Ok(MoveReport {
            destination: destination.to_string_lossy().into_owned(),
            moved_count,
        })
    }
}

/// Use the explicit destination, or draw a fresh name under `dir`; either
/// way make sure the directory exists before the executors write into it.
async fn resolve_destination(dir: &Path, destination: Option<String>) -> Result<PathBuf> {
    let destination = match destination {
        Some(explicit) => PathBuf::from(explicit),
        None => dir.join(naming::unique_name(dir).await),
    };
    fs::create_dir_all(&destination)
        .await
        .map_err(|e| Error::DirectoryCreationFailed {
            path: destination.clone(),
            source: e,
        })?;
    Ok(destination)
}
