use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::FileMap;
use crate::errors::GitletError;
use std::path::Path;

impl Repository {
    /// Overwrite one working file with its version in a commit (HEAD when
    /// `revision` is None)
    ///
    /// Only the requested file is touched, so no untracked-file check runs.
    pub fn checkout_file(&mut self, revision: Option<&str>, path: &Path) -> anyhow::Result<()> {
        let commit_oid = match revision {
            Some(revision) => self.database().resolve_commit_id(revision)?,
            None => self.refs().resolve_head()?,
        };
        let commit = self.database().load_commit(&commit_oid)?;

        let Ok(path) = self.workspace().normalize(path) else {
            anyhow::bail!(GitletError::FileNotFoundInCommit);
        };
        let Some(blob_oid) = commit.blob_for(&path) else {
            anyhow::bail!(GitletError::FileNotFoundInCommit);
        };

        let blob = self.database().load_blob(blob_oid)?;
        self.workspace().write_file(&path, blob.content())?;

        tracing::debug!(
            path = %path.display(),
            commit = %commit_oid.to_short_oid(),
            "restored file"
        );
        Ok(())
    }

    /// Make `name` the current branch and sync the working directory to its
    /// head commit
    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let Ok(branch_name) = BranchName::try_parse(name.to_string()) else {
            anyhow::bail!(GitletError::NoSuchBranch);
        };
        let Some(target_oid) = self.refs().read_branch(&branch_name)? else {
            anyhow::bail!(GitletError::NoSuchBranch);
        };
        if self.refs().is_current_branch(&branch_name)? {
            anyhow::bail!(GitletError::AlreadyOnBranch);
        }

        let target = self.database().load_commit(&target_oid)?;
        self.sync_to(target.files())?;
        self.refs().set_current(&branch_name)?;

        self.write_updates()
    }

    /// Replace the working directory content with a snapshot
    ///
    /// Fails without touching anything when an untracked file is in the way.
    /// Otherwise staged and HEAD-tracked files are deleted, the snapshot is
    /// written out, and both pending areas are cleared in memory.
    pub fn sync_to(&mut self, target: &FileMap) -> anyhow::Result<()> {
        let mut migration = Migration::new(self, target);
        migration.plan_changes()?;
        migration.update_workspace()?;

        self.index_mut().clear_all();
        self.removals_mut().clear_all();

        Ok(())
    }
}
