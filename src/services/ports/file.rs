use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    NotFound(PathBuf),
    AlreadyExists(PathBuf),
    NotAFile(PathBuf),
    NotADirectory(PathBuf),
    Io(io::Error),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound(p) => write!(f, "not found: {}", p.display()),
            FileError::AlreadyExists(p) => write!(f, "already exists: {}", p.display()),
            FileError::NotAFile(p) => write!(f, "not a file: {}", p.display()),
            FileError::NotADirectory(p) => write!(f, "not a directory: {}", p.display()),
            FileError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

/// Name + location only; callers stat each entry on their own so one bad
/// entry can be dropped without losing the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub is_dir: bool,
    pub is_file: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileMetadata {
    pub fn from_std(meta: std::fs::Metadata) -> Self {
        Self {
            is_dir: meta.is_dir(),
            is_file: meta.is_file(),
            size: meta.len(),
            modified: meta.modified().ok(),
        }
    }
}

pub trait FileProvider {
    fn scheme(&self) -> &'static str;

    /// Entries in the order the backend yields them (unsorted).
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Follows symlinks.
    fn metadata(&self, path: &Path) -> Result<FileMetadata>;

    /// At most `max_lines` lines from the start of the file, lossily decoded.
    fn read_head_lines(&self, path: &Path, max_lines: usize) -> Result<Vec<String>>;

    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Creates an empty file; fails with `AlreadyExists` instead of truncating.
    fn create_file(&self, path: &Path) -> Result<()>;

    fn create_dir(&self, path: &Path) -> Result<()>;

    fn remove_file(&self, path: &Path) -> Result<()>;

    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Does not follow symlinks, so a dangling link still counts.
    fn exists(&self, path: &Path) -> bool;
}
