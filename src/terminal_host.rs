//! 终端宿主：stdin 提示、stderr 通知、外部命令承担编辑器职责

use cppview::services::adapters::{reveal_in_file_manager, SystemClipboard};
use cppview::services::ports::{
    ChangeView, EditorHost, HostError, NoticeLevel, OpenOptions, WorkspaceFolder,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

pub struct TerminalHost {
    folders: Vec<WorkspaceFolder>,
    clipboard: SystemClipboard,
}

impl TerminalHost {
    pub fn new(folders: Vec<WorkspaceFolder>) -> Self {
        Self {
            folders,
            clipboard: SystemClipboard::new(),
        }
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        eprint!("{}", prompt);
        let _ = io::stderr().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                None
            }
        }
    }
}

impl EditorHost for TerminalHost {
    fn workspace_folders(&self) -> Vec<WorkspaceFolder> {
        self.folders.clone()
    }

    fn prompt_input(&self, prompt: &str) -> Option<String> {
        self.read_line(&format!("{}: ", prompt))
    }

    fn confirm(&self, message: &str) -> bool {
        self.read_line(&format!("{} [y/N] ", message))
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes"))
    }

    fn notify(&self, level: NoticeLevel, message: &str) {
        let tag = match level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        eprintln!("{}: {}", tag, message);
    }

    /// Hands the file to `$VISUAL`/`$EDITOR`; without one the path is printed.
    fn open_document(&self, path: &Path, _options: OpenOptions) -> Result<(), HostError> {
        let editor = std::env::var_os("VISUAL").or_else(|| std::env::var_os("EDITOR"));
        let Some(editor) = editor else {
            println!("{}", path.display());
            return Ok(());
        };
        let status = Command::new(&editor)
            .arg(path)
            .status()
            .map_err(|e| HostError::Failed(format!("failed to launch editor: {}", e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(HostError::Failed(format!("editor exited with {}", status)))
        }
    }

    fn pin_active_editor(&self) -> Result<(), HostError> {
        Err(HostError::Unsupported("pinning editors"))
    }

    fn reveal_in_file_manager(&self, path: &Path) -> Result<(), HostError> {
        reveal_in_file_manager(path).map_err(|e| HostError::Failed(e.to_string()))
    }

    fn write_clipboard(&self, text: &str) -> Result<(), HostError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| HostError::Failed(e.to_string()))
    }

    fn open_change_view(&self, change: &ChangeView) -> Result<(), HostError> {
        println!(
            "[{}] {} ({})",
            change.kind.marker(),
            change.path.display(),
            change.repo_root.display()
        );
        if change.patch.is_empty() {
            println!("(no textual diff against HEAD)");
        } else {
            print!("{}", change.patch);
        }
        Ok(())
    }
}
