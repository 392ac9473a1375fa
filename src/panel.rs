//! 面板生命周期上下文
//!
//! `CppViewPanel` 持有宿主、文件服务、刷新通道与文件监听器；
//! `activate` 订阅监听，`deactivate`（或 drop）取消订阅。没有任何全局状态。

use crate::actions::{ActionContext, ActionError, ActionOutcome, ExplorerCommand};
use crate::explorer::TreeModelBuilder;
use crate::models::TreeNode;
use crate::services::adapters::{GitCli, SystemClipboard, WorkspaceWatcher};
use crate::services::ports::{Clipboard, EditorHost, ExplorerConfig, FileProvider, VcsProvider};
use crate::services::{refresh_channel, RefreshReceiver, RefreshSender};
use crate::views::TreeItemView;

/// Identifier hosts register the tree data source under.
pub const PANEL_ID: &str = "cppView";

pub struct CppViewPanel<H: EditorHost> {
    host: H,
    files: Box<dyn FileProvider>,
    clipboard: Box<dyn Clipboard>,
    vcs: Box<dyn VcsProvider>,
    config: ExplorerConfig,
    refresh_tx: RefreshSender,
    refresh_rx: RefreshReceiver,
    watcher: Option<WorkspaceWatcher>,
}

impl<H: EditorHost> CppViewPanel<H> {
    pub fn new(host: H, files: Box<dyn FileProvider>, config: ExplorerConfig) -> Self {
        let (refresh_tx, refresh_rx) = refresh_channel();
        Self {
            host,
            files,
            clipboard: Box::new(SystemClipboard::new()),
            vcs: Box::new(GitCli::new()),
            config,
            refresh_tx,
            refresh_rx,
            watcher: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_vcs(mut self, vcs: Box<dyn VcsProvider>) -> Self {
        self.vcs = vcs;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Builder over the host's current folders. Folders are re-read on every
    /// call so workspace changes need no extra plumbing.
    pub fn builder(&self) -> TreeModelBuilder<'_> {
        TreeModelBuilder::new(
            self.files.as_ref(),
            &self.config,
            self.host.workspace_folders(),
        )
    }

    pub fn list_children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        self.builder().list_children(node)
    }

    pub fn tree_item(&self, node: &TreeNode) -> TreeItemView {
        TreeItemView::from_node(node)
    }

    pub fn title(&self) -> String {
        let folders = self.host.workspace_folders();
        let name = match folders.as_slice() {
            [only] => Some(only.name.clone()),
            _ => self.host.workspace_name(),
        };
        match name {
            Some(name) if !name.is_empty() => format!("{} {}", name, self.config.title_suffix),
            _ => self.config.fallback_title.clone(),
        }
    }

    /// Starts watching the first workspace folder. Returns whether live
    /// refresh is active; a failed watch leaves the panel usable.
    pub fn activate(&mut self) -> bool {
        if self.watcher.is_some() {
            return true;
        }
        let Some(first) = self.host.workspace_folders().into_iter().next() else {
            tracing::info!("no workspace folder, live refresh disabled");
            return false;
        };
        match WorkspaceWatcher::start(&first.path, self.refresh_tx.clone()) {
            Ok(watcher) => {
                tracing::info!(root = %first.path.display(), "panel activated");
                self.watcher = Some(watcher);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to watch workspace");
                false
            }
        }
    }

    pub fn deactivate(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            tracing::info!(root = %watcher.root().display(), "panel deactivated");
            watcher.stop();
        }
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn refresh(&self) {
        self.refresh_tx.send();
    }

    pub fn refresh_sender(&self) -> RefreshSender {
        self.refresh_tx.clone()
    }

    pub fn refresh_receiver(&self) -> &RefreshReceiver {
        &self.refresh_rx
    }

    pub fn run_command(
        &self,
        command: ExplorerCommand,
        node: Option<&TreeNode>,
    ) -> Result<ActionOutcome, ActionError> {
        let ctx = ActionContext {
            host: &self.host,
            files: self.files.as_ref(),
            clipboard: self.clipboard.as_ref(),
            vcs: self.vcs.as_ref(),
            refresh: &self.refresh_tx,
        };
        ctx.run(command, node)
    }

    pub fn run_command_id(
        &self,
        id: &str,
        node: Option<&TreeNode>,
    ) -> Result<ActionOutcome, ActionError> {
        match ExplorerCommand::from_id(id) {
            Some(command) => self.run_command(command, node),
            None => {
                tracing::warn!(id, "unknown command");
                Err(ActionError::UnknownCommand(id.to_string()))
            }
        }
    }
}

impl<H: EditorHost> Drop for CppViewPanel<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
#[path = "../tests/unit/panel.rs"]
mod tests;
