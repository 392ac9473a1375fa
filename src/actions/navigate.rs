use super::{ActionContext, ActionError, ActionOutcome};
use crate::models::TreeNode;
use crate::services::ports::OpenOptions;

impl ActionContext<'_> {
    pub(super) fn open_file(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        if target.is_directory() {
            return Err(ActionError::NotAFile(target.full_path.clone()));
        }
        self.host
            .open_document(&target.full_path, OpenOptions::focused())?;
        Ok(ActionOutcome::Completed)
    }

    pub(super) fn pin(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        self.open_file(target)?;
        self.host.pin_active_editor()?;
        Ok(ActionOutcome::Completed)
    }

    pub(super) fn reveal(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        self.host.reveal_in_file_manager(&target.full_path)?;
        Ok(ActionOutcome::Completed)
    }
}
