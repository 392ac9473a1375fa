use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Untracked,
    Conflict,
}

impl ChangeKind {
    pub fn marker(self) -> char {
        match self {
            ChangeKind::Modified => 'M',
            ChangeKind::Added => 'A',
            ChangeKind::Deleted => 'D',
            ChangeKind::Untracked => 'U',
            ChangeKind::Conflict => '!',
        }
    }
}

/// Working tree state of one file relative to the last commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub kind: ChangeKind,
    /// Unified diff against HEAD; empty for untracked files.
    pub patch: String,
}

#[derive(Debug)]
pub enum VcsError {
    Unavailable(String),
    CommandFailed { command: String, stderr: String },
    Io(std::io::Error),
}

impl fmt::Display for VcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsError::Unavailable(msg) => write!(f, "version control unavailable: {}", msg),
            VcsError::CommandFailed { command, stderr } => {
                write!(f, "`{}` failed: {}", command, stderr.trim())
            }
            VcsError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for VcsError {}

impl From<std::io::Error> for VcsError {
    fn from(e: std::io::Error) -> Self {
        VcsError::Io(e)
    }
}

pub trait VcsProvider {
    fn is_available(&self) -> bool;

    /// Root of the repository whose working tree contains `path`.
    fn repository_root(&self, path: &Path) -> Result<Option<PathBuf>, VcsError>;

    /// `None` when the file has no uncommitted changes.
    fn working_change(&self, repo_root: &Path, path: &Path)
        -> Result<Option<FileChange>, VcsError>;
}
