use super::{ActionContext, ActionError, ActionOutcome};
use crate::models::TreeNode;
use crate::services::ports::{ChangeView, NoticeLevel};

impl ActionContext<'_> {
    /// Host-native change view first, then git directly.
    pub(super) fn show_diff(&self, target: &TreeNode) -> Result<ActionOutcome, ActionError> {
        if target.is_directory() {
            return Err(ActionError::NotAFile(target.full_path.clone()));
        }
        let path = target.full_path.as_path();

        match self.host.show_native_changes(path) {
            Ok(true) => return Ok(ActionOutcome::ChangesShown),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "native change view failed, querying git");
            }
        }

        if !self.vcs.is_available() {
            return Err(ActionError::VcsUnavailable);
        }

        let Some(repo_root) = self.vcs.repository_root(path)? else {
            self.host.notify(
                NoticeLevel::Info,
                &format!("'{}' is not under version control", target.label),
            );
            return Ok(ActionOutcome::NotVersioned);
        };

        match self.vcs.working_change(&repo_root, path)? {
            None => {
                self.host.notify(
                    NoticeLevel::Info,
                    &format!("No uncommitted changes in '{}'", target.label),
                );
                Ok(ActionOutcome::NoChanges)
            }
            Some(change) => {
                self.host.open_change_view(&ChangeView {
                    path: change.path,
                    repo_root,
                    kind: change.kind,
                    patch: change.patch,
                })?;
                Ok(ActionOutcome::ChangesShown)
            }
        }
    }
}
