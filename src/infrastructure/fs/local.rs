//! Local file system implementation — implements the `FileSystem` port
//! for standard disk I/O, with atomic writes and tilde expansion
//! (spec §4.9).

use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::path::expand_tilde;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAYS_MS: [u64; 3] = [50, 150, 400];

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }

    /// Copy via a temp file in the target's directory plus rename, so a
    /// reader never observes a partially-written file (spec §4.9 point 2).
    fn atomic_copy(source: &Path, target: &Path) -> std::io::Result<()> {
        let dir = target.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let content = std::fs::read(source)?;
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&content)?;
        temp.flush()?;

        let mut temp = temp;
        for attempt in 0..=MAX_RETRIES {
            match temp.persist(target) {
                Ok(_) => return Ok(()),
                Err(err) if attempt < MAX_RETRIES => {
                    thread::sleep(Duration::from_millis(RETRY_DELAYS_MS[attempt as usize]));
                    temp = err.file;
                }
                Err(err) => return Err(err.error),
            }
        }
        Ok(())
    }
}

impl FileSystem for LocalFileSystem {
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let expanded = self.expand_home(path);
        std::fs::read_to_string(&expanded).map_err(Into::into)
    }

    fn exists(&self, path: &Path) -> bool {
        self.expand_home(path).exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.expand_home(path).is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.expand_home(path).is_dir()
    }

    fn read_dir_names(&self, path: &Path) -> FsResult<Vec<String>> {
        let expanded = self.expand_home(path);
        let entries = std::fs::read_dir(&expanded)?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(self.expand_home(path)).map_err(Into::into)
    }

    fn copy_file(&self, source: &Path, target: &Path) -> FsResult<()> {
        let source = self.expand_home(source);
        let target = self.expand_home(target);
        Self::atomic_copy(&source, &target).map_err(|e| FsError::Other(e.to_string()))
    }

    fn expand_home(&self, path: &Path) -> PathBuf {
        expand_tilde(&path.to_string_lossy())
    }
}
