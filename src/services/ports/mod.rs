//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod config;
pub mod file;
pub mod host;
pub mod vcs;

pub use clipboard::{Clipboard, ClipboardError};
pub use config::ExplorerConfig;
pub use file::{DirEntry, FileError, FileMetadata, FileProvider, Result as FileResult};
pub use host::{
    ChangeView, EditorHost, HostError, NoticeLevel, OpenOptions, WorkspaceFolder,
};
pub use vcs::{ChangeKind, FileChange, VcsError, VcsProvider};
