use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::conflict::UntrackedGuard;
use crate::errors::GitletError;

impl Repository {
    /// Check whether `name` could be merged into the current branch
    ///
    /// Only the preconditions are enforced: no pending changes, a known
    /// branch other than the current one, and no untracked file the branch
    /// would overwrite. File contents are never combined.
    pub fn merge(&mut self, name: &str) -> anyhow::Result<()> {
        if self.has_pending_changes() {
            anyhow::bail!(GitletError::UncommittedChanges);
        }

        let Ok(branch_name) = BranchName::try_parse(name.to_string()) else {
            anyhow::bail!(GitletError::BranchNotFound);
        };
        let Some(target_oid) = self.refs().read_branch(&branch_name)? else {
            anyhow::bail!(GitletError::BranchNotFound);
        };
        if self.refs().is_current_branch(&branch_name)? {
            anyhow::bail!(GitletError::SelfMerge);
        }

        let (_, head) = self.head_commit()?;
        let target = self.database().load_commit(&target_oid)?;
        let working_files = self.workspace().list_files()?;

        UntrackedGuard::new(head.files(), self.index().snapshot())
            .check(&working_files, target.files())?;

        tracing::info!(branch = %branch_name, oid = %target_oid, "merge preconditions hold");
        Ok(())
    }
}
