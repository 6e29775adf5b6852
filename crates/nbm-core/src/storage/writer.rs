//! Streaming writer for `.part` temp files with atomic finalize.

use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::{temp_path, WriteError};

/// Writes a download to `{final_path}.part` and renames it into place on
/// `commit`. Dropping the writer before commit (error paths, cancelled tasks)
/// removes the temp file, so no partial data survives under either name.
pub struct PartWriter {
    file: Option<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
    bytes_written: u64,
    committed: bool,
}

impl PartWriter {
    /// Create (or truncate) the temp file next to `final_path`.
    /// Same directory as the final name, so the rename stays on one filesystem.
    pub async fn create(final_path: &Path) -> Result<Self, WriteError> {
        let temp = temp_path(final_path);
        let file = File::create(&temp).await.map_err(|source| WriteError {
            path: temp.clone(),
            source,
        })?;
        Ok(Self {
            file: Some(file),
            temp_path: temp,
            final_path: final_path.to_path_buf(),
            bytes_written: 0,
            committed: false,
        })
    }

    /// Append one chunk of the response body.
    pub async fn write_chunk(&mut self, data: &[u8]) -> Result<(), WriteError> {
        if let Some(file) = self.file.as_mut() {
            file.write_all(data).await.map_err(|source| WriteError {
                path: self.temp_path.clone(),
                source,
            })?;
            self.bytes_written += data.len() as u64;
        }
        Ok(())
    }

    /// Bytes appended so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush, sync and atomically rename the temp file to its final name.
    /// Nothing is visible at the final path until this returns Ok.
    pub async fn commit(mut self) -> Result<u64, WriteError> {
        if let Some(mut file) = self.file.take() {
            file.flush().await.map_err(|source| WriteError {
                path: self.temp_path.clone(),
                source,
            })?;
            file.sync_all().await.map_err(|source| WriteError {
                path: self.temp_path.clone(),
                source,
            })?;
        }
        // Synchronous rename: cannot be left half-done by a dropped future.
        std::fs::rename(&self.temp_path, &self.final_path).map_err(|source| WriteError {
            path: self.final_path.clone(),
            source,
        })?;
        self.committed = true;
        Ok(self.bytes_written)
    }
}

impl Drop for PartWriter {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.temp_path);
        }
    }
}
