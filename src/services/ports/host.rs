//! Editor host contract.
//!
//! Everything the panel needs from the surrounding editor: workspace
//! folders, dialogs, notifications, document navigation and the native
//! change view. Calls are synchronous from the panel's point of view.

use super::vcs::ChangeKind;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    pub name: String,
    pub path: PathBuf,
}

impl WorkspaceFolder {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Folder named after the last path component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOptions {
    pub preview: bool,
    pub preserve_focus: bool,
}

impl OpenOptions {
    /// Regular (non-preview) editor that takes focus.
    pub const fn focused() -> Self {
        Self {
            preview: false,
            preserve_focus: false,
        }
    }
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self::focused()
    }
}

/// Uncommitted change of one file, handed to the host's diff view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeView {
    pub path: PathBuf,
    pub repo_root: PathBuf,
    pub kind: ChangeKind,
    pub patch: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    Unsupported(&'static str),
    Failed(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Unsupported(what) => write!(f, "host does not support {}", what),
            HostError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HostError {}

pub trait EditorHost {
    fn workspace_folders(&self) -> Vec<WorkspaceFolder>;

    /// Name of a multi-folder workspace, if the host has one.
    fn workspace_name(&self) -> Option<String> {
        None
    }

    /// `None` when the user cancels.
    fn prompt_input(&self, prompt: &str) -> Option<String>;

    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, level: NoticeLevel, message: &str);

    fn open_document(&self, path: &Path, options: OpenOptions) -> Result<(), HostError>;

    fn pin_active_editor(&self) -> Result<(), HostError>;

    fn reveal_in_file_manager(&self, path: &Path) -> Result<(), HostError>;

    fn write_clipboard(&self, text: &str) -> Result<(), HostError>;

    /// Native "open changes" for `path`. `Ok(false)` means the host had
    /// nothing to show and the caller should query version control itself.
    fn show_native_changes(&self, _path: &Path) -> Result<bool, HostError> {
        Ok(false)
    }

    fn open_change_view(&self, change: &ChangeView) -> Result<(), HostError>;
}
