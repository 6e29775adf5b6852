//! Disk I/O and file lifecycle.
//!
//! Downloads stream into a `.part` temp file in the destination directory and
//! are renamed into place once complete, so a file is only ever visible under
//! its final name when every byte has been written and synced.

mod writer;

pub use writer::PartWriter;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `042.png` → `042.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create `path` and any missing parents. Succeeds if the directory already exists.
pub async fn ensure_dir(path: &Path) -> Result<(), WriteError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| WriteError {
            path: path.to_path_buf(),
            source,
        })
}

/// Local filesystem failure while preparing or persisting a download.
#[derive(Debug, Error)]
#[error("write failed for {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("042.png"));
        assert_eq!(p.to_string_lossy(), "042.png.part");
        let p2 = temp_path(Path::new("/tmp/neko/0001.gif"));
        assert_eq!(p2.to_string_lossy(), "/tmp/neko/0001.gif.part");
    }

    #[tokio::test]
    async fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("neko").join("deep");
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }
}
