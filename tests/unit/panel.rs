use super::*;
use crate::services::adapters::LocalFileProvider;
use crate::services::ports::{
    ChangeView, ClipboardError, HostError, NoticeLevel, OpenOptions, WorkspaceFolder,
};
use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

#[derive(Default)]
struct StubHost {
    folders: Vec<WorkspaceFolder>,
    name: Option<String>,
    notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl EditorHost for StubHost {
    fn workspace_folders(&self) -> Vec<WorkspaceFolder> {
        self.folders.clone()
    }

    fn workspace_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn prompt_input(&self, _prompt: &str) -> Option<String> {
        None
    }

    fn confirm(&self, _message: &str) -> bool {
        false
    }

    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }

    fn open_document(&self, _path: &Path, _options: OpenOptions) -> Result<(), HostError> {
        Ok(())
    }

    fn pin_active_editor(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn reveal_in_file_manager(&self, _path: &Path) -> Result<(), HostError> {
        Ok(())
    }

    fn write_clipboard(&self, _text: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn open_change_view(&self, _change: &ChangeView) -> Result<(), HostError> {
        Ok(())
    }
}

struct NullClipboard;

impl Clipboard for NullClipboard {
    fn set_bytes(&self, _data: &[u8]) -> Result<(), ClipboardError> {
        Ok(())
    }
}

fn panel(host: StubHost) -> CppViewPanel<StubHost> {
    CppViewPanel::new(
        host,
        Box::new(LocalFileProvider::new()),
        ExplorerConfig::default(),
    )
    .with_clipboard(Box::new(NullClipboard))
}

#[test]
fn title_uses_single_folder_name() {
    let p = panel(StubHost {
        folders: vec![WorkspaceFolder::new("engine", "/w/engine")],
        name: Some("ignored".into()),
        ..StubHost::default()
    });
    assert_eq!(p.title(), "engine cppView");
}

#[test]
fn title_uses_workspace_name_for_multi_root() {
    let p = panel(StubHost {
        folders: vec![
            WorkspaceFolder::new("a", "/w/a"),
            WorkspaceFolder::new("b", "/w/b"),
        ],
        name: Some("game".into()),
        ..StubHost::default()
    });
    assert_eq!(p.title(), "game cppView");
}

#[test]
fn title_falls_back_without_any_name() {
    let p = panel(StubHost::default());
    assert_eq!(p.title(), "Cpp View");
}

#[test]
fn list_children_reads_current_workspace() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.c"), "#include \"a.h\"\n").unwrap();
    std::fs::write(dir.path().join("a.h"), "").unwrap();

    let p = panel(StubHost {
        folders: vec![WorkspaceFolder::from_path(dir.path())],
        ..StubHost::default()
    });

    let roots = p.list_children(None);
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].label, "a.c");
    assert!(p.tree_item(&roots[0]).command.is_some());
    assert_eq!(p.list_children(Some(&roots[0]))[0].label, "a.h");
}

#[test]
fn refresh_sends_one_signal() {
    let p = panel(StubHost::default());
    p.refresh();
    assert_eq!(p.refresh_receiver().drain(), 1);
    assert_eq!(p.refresh_receiver().drain(), 0);
}

#[test]
fn activate_without_folders_does_not_watch() {
    let mut p = panel(StubHost::default());
    assert!(!p.activate());
    assert!(!p.is_watching());
}

#[test]
fn watcher_signals_refresh_until_deactivated() {
    let dir = tempdir().unwrap();
    let mut p = panel(StubHost {
        folders: vec![WorkspaceFolder::from_path(dir.path())],
        ..StubHost::default()
    });

    assert!(p.activate());
    assert!(p.is_watching());

    std::fs::write(dir.path().join("new.c"), "int x;\n").unwrap();
    assert!(p.refresh_receiver().recv_timeout(Duration::from_secs(5)));

    p.deactivate();
    assert!(!p.is_watching());
}

#[test]
fn unknown_command_id_is_rejected() {
    let p = panel(StubHost::default());
    let err = p.run_command_id("cppView.frobnicate", None).unwrap_err();
    assert!(matches!(err, ActionError::UnknownCommand(ref id) if id == "cppView.frobnicate"));
}

#[test]
fn command_failure_is_reported_to_host() {
    let p = panel(StubHost::default());
    let err = p.run_command_id("cppView.copyPath", None).unwrap_err();
    assert!(matches!(err, ActionError::NoTarget));
    assert_eq!(p.host().notices.borrow()[0].0, NoticeLevel::Error);
}
