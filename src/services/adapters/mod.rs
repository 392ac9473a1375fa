//! Service adapters: OS specific implementations (IO/subprocess/watch).

pub mod clipboard;
pub mod file;
pub mod file_watcher;
pub mod git;
pub mod log_dirs;
pub mod reveal;

pub use clipboard::SystemClipboard;
pub use file::LocalFileProvider;
pub use file_watcher::{WatchError, WorkspaceWatcher};
pub use git::GitCli;
pub use log_dirs::{ensure_log_dir, get_log_dir};
pub use reveal::reveal_in_file_manager;
