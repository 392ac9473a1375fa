//! 面板命令层
//!
//! 每个命令都是无状态的处理函数：以选中节点（或第一个工作区根目录）为目标，
//! 修改文件系统或宿主 UI 状态，之后按需发出刷新信号。

mod clipboard;
mod diff;
mod file_ops;
mod navigate;

use crate::models::TreeNode;
use crate::services::bus::RefreshSender;
use crate::services::ports::{
    Clipboard, ClipboardError, EditorHost, FileError, FileProvider, HostError, NoticeLevel,
    VcsError, VcsProvider, WorkspaceFolder,
};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorerCommand {
    OpenFile,
    CreateFile,
    CreateFolder,
    RevealInOs,
    Pin,
    CopyContents,
    CopyPath,
    Delete,
    ShowDiff,
}

impl ExplorerCommand {
    pub const ALL: [ExplorerCommand; 9] = [
        ExplorerCommand::OpenFile,
        ExplorerCommand::CreateFile,
        ExplorerCommand::CreateFolder,
        ExplorerCommand::RevealInOs,
        ExplorerCommand::Pin,
        ExplorerCommand::CopyContents,
        ExplorerCommand::CopyPath,
        ExplorerCommand::Delete,
        ExplorerCommand::ShowDiff,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExplorerCommand::OpenFile => "cppView.openFile",
            ExplorerCommand::CreateFile => "cppView.createFile",
            ExplorerCommand::CreateFolder => "cppView.createFolder",
            ExplorerCommand::RevealInOs => "cppView.revealInOS",
            ExplorerCommand::Pin => "cppView.pin",
            ExplorerCommand::CopyContents => "cppView.copy",
            ExplorerCommand::CopyPath => "cppView.copyPath",
            ExplorerCommand::Delete => "cppView.delete",
            ExplorerCommand::ShowDiff => "cppView.showDiff",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            ExplorerCommand::OpenFile => "Open File",
            ExplorerCommand::CreateFile => "New File",
            ExplorerCommand::CreateFolder => "New Folder",
            ExplorerCommand::RevealInOs => "Reveal in File Manager",
            ExplorerCommand::Pin => "Pin",
            ExplorerCommand::CopyContents => "Copy",
            ExplorerCommand::CopyPath => "Copy Path",
            ExplorerCommand::Delete => "Delete",
            ExplorerCommand::ShowDiff => "Show Differences",
        }
    }
}

impl fmt::Display for ExplorerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The user backed out of a prompt or confirmation.
    Cancelled,
    Created(PathBuf),
    Deleted(PathBuf),
    ChangesShown,
    NoChanges,
    NotVersioned,
}

#[derive(Debug)]
pub enum ActionError {
    UnknownCommand(String),
    NoTarget,
    InvalidName(String),
    AlreadyExists(PathBuf),
    NotAFile(PathBuf),
    File(FileError),
    Clipboard(ClipboardError),
    Host(HostError),
    VcsUnavailable,
    Vcs(VcsError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::UnknownCommand(id) => write!(f, "Unknown command '{}'", id),
            ActionError::NoTarget => write!(f, "No file or folder selected and no workspace open"),
            ActionError::InvalidName(name) => write!(
                f,
                "'{}' is not a valid name: use a single file or folder name",
                name
            ),
            ActionError::AlreadyExists(p) => {
                write!(f, "A file or folder named '{}' already exists", p.display())
            }
            ActionError::NotAFile(p) => write!(f, "'{}' is not a file", p.display()),
            ActionError::File(e) => write!(f, "{}", e),
            ActionError::Clipboard(e) => write!(f, "{}", e),
            ActionError::Host(e) => write!(f, "{}", e),
            ActionError::VcsUnavailable => write!(f, "Git integration is not available"),
            ActionError::Vcs(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<FileError> for ActionError {
    fn from(e: FileError) -> Self {
        match e {
            FileError::AlreadyExists(p) => ActionError::AlreadyExists(p),
            other => ActionError::File(other),
        }
    }
}

impl From<ClipboardError> for ActionError {
    fn from(e: ClipboardError) -> Self {
        ActionError::Clipboard(e)
    }
}

impl From<HostError> for ActionError {
    fn from(e: HostError) -> Self {
        ActionError::Host(e)
    }
}

impl From<VcsError> for ActionError {
    fn from(e: VcsError) -> Self {
        match e {
            VcsError::Unavailable(_) => ActionError::VcsUnavailable,
            other => ActionError::Vcs(other),
        }
    }
}

/// Collaborators one command invocation needs. Borrowed, built per call.
pub struct ActionContext<'a> {
    pub host: &'a dyn EditorHost,
    pub files: &'a dyn FileProvider,
    pub clipboard: &'a dyn Clipboard,
    pub vcs: &'a dyn VcsProvider,
    pub refresh: &'a RefreshSender,
}

impl ActionContext<'_> {
    /// Runs `command` against `selected`. Failures are reported to the host
    /// here and also returned; nothing escapes as a panic.
    pub fn run(
        &self,
        command: ExplorerCommand,
        selected: Option<&TreeNode>,
    ) -> Result<ActionOutcome, ActionError> {
        let result = self
            .resolve_target(selected)
            .and_then(|target| self.dispatch(command, &target));

        match &result {
            Ok(outcome) => {
                tracing::debug!(command = command.id(), outcome = ?outcome, "command finished")
            }
            Err(e) => {
                tracing::error!(command = command.id(), error = %e, "command failed");
                self.host.notify(NoticeLevel::Error, &e.to_string());
            }
        }
        result
    }

    fn dispatch(
        &self,
        command: ExplorerCommand,
        target: &TreeNode,
    ) -> Result<ActionOutcome, ActionError> {
        match command {
            ExplorerCommand::OpenFile => self.open_file(target),
            ExplorerCommand::CreateFile => self.create_file(target),
            ExplorerCommand::CreateFolder => self.create_folder(target),
            ExplorerCommand::RevealInOs => self.reveal(target),
            ExplorerCommand::Pin => self.pin(target),
            ExplorerCommand::CopyContents => self.copy_contents(target),
            ExplorerCommand::CopyPath => self.copy_path(target),
            ExplorerCommand::Delete => self.delete(target),
            ExplorerCommand::ShowDiff => self.show_diff(target),
        }
    }

    fn resolve_target(&self, selected: Option<&TreeNode>) -> Result<TreeNode, ActionError> {
        if let Some(node) = selected {
            return Ok(node.clone());
        }
        self.host
            .workspace_folders()
            .into_iter()
            .next()
            .map(|WorkspaceFolder { name, path }| TreeNode::directory(name, path))
            .ok_or(ActionError::NoTarget)
    }

    fn request_refresh(&self) {
        if !self.refresh.send() {
            tracing::debug!("refresh requested with no listener");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actions/mod.rs"]
mod tests;
