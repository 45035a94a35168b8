//! FileSystem port — abstraction over file I/O so the domain and
//! application layers never touch `std::fs` directly (spec §4.9, §6).

use std::path::{Path, PathBuf};

pub type FsResult<T> = Result<T, FsError>;

#[derive(Debug)]
pub enum FsError {
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    Io(std::io::Error),
    Other(String),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            FsError::PermissionDenied(path) => write!(f, "permission denied: {}", path.display()),
            FsError::Io(err) => write!(f, "I/O error: {err}"),
            FsError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface.
///
/// Implementations:
/// - `LocalFileSystem` — standard file I/O, atomic writes via tempfile.
/// - `MockFileSystem` — in-memory, for tests.
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> FsResult<String>;
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_dir_names(&self, path: &Path) -> FsResult<Vec<String>>;
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy `source` to `target`, creating parent directories as needed.
    fn copy_file(&self, source: &Path, target: &Path) -> FsResult<()>;

    fn expand_home(&self, path: &Path) -> PathBuf;
}
