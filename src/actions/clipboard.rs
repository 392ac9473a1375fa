use super::{ActionContext, ActionError, ActionOutcome};
use crate::models::TreeNode;
use crate::services::ports::NoticeLevel;

impl ActionContext<'_> {
    pub(super) fn copy_contents(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        if target.is_directory() {
            return Err(ActionError::NotAFile(target.full_path.clone()));
        }
        let data = self.files.read_file_bytes(&target.full_path)?;
        self.clipboard.set_bytes(&data)?;
        self.host.notify(
            NoticeLevel::Info,
            &format!("Copied contents of '{}'", target.label),
        );
        Ok(ActionOutcome::Completed)
    }

    pub(super) fn copy_path(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        let text = target.full_path.to_string_lossy();
        self.host.write_clipboard(&text)?;
        Ok(ActionOutcome::Completed)
    }
}
