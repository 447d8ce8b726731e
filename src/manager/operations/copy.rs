use async_recursion::async_recursion;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
pub struct CopyReport {
    pub destination: String,
    pub copied_count: usize,
}

/// Trait for copying selected entries into a destination directory.
pub trait Copier {
    /// Copy each named entry from `dir` into `destination`, recursively for
    /// directories. Fail-fast: the first entry that cannot be copied aborts
    /// the batch.
    async fn copy(&self, dir: &Path, names: &[String], destination: &Path) -> Result<usize>;
}

pub struct LocalCopier;

impl Copier for LocalCopier {
    async fn copy(&self, dir: &Path, names: &[String], destination: &Path) -> Result<usize> {
        let mut copied_count = 0;
        for name in names {
            let source = dir.join(name);
            let target = destination.join(name);
            copy_entry(&source, &target, destination)
                .await
                .map_err(|e| Error::CopyFailed {
                    entry: name.clone(),
                    destination: destination.to_path_buf(),
                    source: Box::new(e),
                })?;
            copied_count += 1;
        }
        Ok(copied_count)
    }
}

async fn copy_entry(source: &Path, target: &Path, destination_root: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(source)
        .await
        .map_err(|e| Error::from_fs(e, source))?;
    if meta.is_dir() {
        copy_dir(source, target, destination_root).await
    } else {
        fs::copy(source, target)
            .await
            .map(|_| ())
            .map_err(|e| Error::from_fs(e, source))
    }
}

#[async_recursion]
async fn copy_dir(source: &Path, target: &Path, destination_root: &Path) -> Result<()> {
    fs::create_dir_all(target)
        .await
        .map_err(|e| Error::from_fs(e, target))?;

    let mut reader = fs::read_dir(source)
        .await
        .map_err(|e| Error::from_fs(e, source))?;
    while let Some(child) = reader
        .next_entry()
        .await
        .map_err(|e| Error::from_fs(e, source))?
    {
        let child_source = child.path();
        // The destination may live inside a copied directory; recursing into
        // it would copy the output into itself without bound.
        if child_source == destination_root {
            continue;
        }
        let child_target = target.join(child.file_name());
        copy_entry(&child_source, &child_target, destination_root).await?;
    }
    Ok(())
}
