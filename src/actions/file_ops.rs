use super::{ActionContext, ActionError, ActionOutcome};
use crate::models::TreeNode;
use crate::services::ports::{NoticeLevel, OpenOptions};
use std::path::{Component, Path, PathBuf};

#[derive(Clone, Copy)]
enum NewEntry {
    File,
    Folder,
}

/// The prompted name as one plain path component. Absolute paths, `..`,
/// `.` and nested names are refused so creation stays inside the target.
fn single_entry_name(name: &str) -> Option<&Path> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => Some(Path::new(part)),
        _ => None,
    }
}

impl ActionContext<'_> {
    pub(super) fn create_file(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        let outcome = self.create_entry(target, NewEntry::File)?;
        if let ActionOutcome::Created(path) = &outcome {
            self.host.open_document(path, OpenOptions::focused())?;
        }
        Ok(outcome)
    }

    pub(super) fn create_folder(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        self.create_entry(target, NewEntry::Folder)
    }

    fn create_entry(
        &self,
        target: &TreeNode,
        entry: NewEntry,
    ) -> Result<ActionOutcome, ActionError> {
        let prompt = match entry {
            NewEntry::File => "Enter the new file name",
            NewEntry::Folder => "Enter the new folder name",
        };
        let Some(name) = self.host.prompt_input(prompt) else {
            return Ok(ActionOutcome::Cancelled);
        };
        let name = name.trim();
        if name.is_empty() {
            return Ok(ActionOutcome::Cancelled);
        }

        let Some(entry_name) = single_entry_name(name) else {
            return Err(ActionError::InvalidName(name.to_string()));
        };

        let path: PathBuf = target.container_dir().join(entry_name);
        if self.files.exists(&path) {
            return Err(ActionError::AlreadyExists(path));
        }

        match entry {
            NewEntry::File => self.files.create_file(&path)?,
            NewEntry::Folder => self.files.create_dir(&path)?,
        }
        tracing::info!(path = %path.display(), "created");
        self.request_refresh();
        Ok(ActionOutcome::Created(path))
    }

    /// Refreshes after any confirmed attempt, successful or not.
    pub(super) fn delete(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        let message = format!("Are you sure you want to delete '{}'?", target.label);
        if !self.host.confirm(&message) {
            return Ok(ActionOutcome::Cancelled);
        }

        let result = if target.is_directory() {
            self.files.remove_dir_all(&target.full_path)
        } else {
            self.files.remove_file(&target.full_path)
        };
        self.request_refresh();

        result?;
        tracing::info!(path = %target.full_path.display(), "deleted");
        self.host
            .notify(NoticeLevel::Info, &format!("Deleted '{}'", target.label));
        Ok(ActionOutcome::Deleted(target.full_path.clone()))
    }
}
