use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

const FILE_PREFIX: &str = "bhasha-";

/// Hands out uniquely named scratch files under one directory.
#[derive(Debug)]
pub struct TempResourceManager {
    root: PathBuf,
}

impl TempResourceManager {
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Creates an empty scratch file whose name ends in `suffix`.
    pub fn acquire(&self, suffix: &str) -> io::Result<TempResource> {
        let file = tempfile::Builder::new()
            .prefix(FILE_PREFIX)
            .suffix(suffix)
            .tempfile_in(&self.root)?;
        Ok(TempResource {
            path: file.path().to_path_buf(),
            created_at: Utc::now(),
            file: Mutex::new(Some(file)),
        })
    }

    /// Number of scratch files currently present under the root.
    pub fn outstanding(&self) -> io::Result<usize> {
        let mut count = 0;
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with(FILE_PREFIX) {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// A scratch file that is removed on [`TempResource::release`] or on drop,
/// whichever comes first.
#[derive(Debug)]
pub struct TempResource {
    path: PathBuf,
    created_at: DateTime<Utc>,
    file: Mutex<Option<NamedTempFile>>,
}

impl TempResource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the file contents with `data`.
    pub fn write(&self, data: &[u8]) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "temp resource released"))?;
        file.as_file().set_len(0)?;
        file.rewind()?;
        file.write_all(data)?;
        file.flush()
    }

    pub fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    /// Deletes the backing file. Safe to call repeatedly.
    pub fn release(&self) {
        let taken = self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(file) = taken else {
            return;
        };
        match file.close() {
            Ok(()) => {
                tracing::trace!(path = %self.path.display(), "Temp resource released");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Failed to remove temp resource"
                );
            }
        }
    }
}
