use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::journal_entry::JournalEntry;
use crate::artifacts::objects::commit::Commit;
use crate::errors::GitletError;
use anyhow::Context;
use std::fs;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            anyhow::bail!(GitletError::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .gitlet/refs/heads directory")?;

        let root = Commit::root();
        let root_oid = self.database().store(root.clone())?;

        let default_branch = BranchName::default_branch();
        self.refs()
            .update_branch(&default_branch, &root_oid)
            .context("Failed to create default branch")?;
        self.refs()
            .set_current(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        self.journal_mut().append(JournalEntry::new(
            root_oid,
            root.timestamp(),
            root.message().to_string(),
        ));
        self.write_updates()?;

        tracing::info!(path = %self.path().display(), "initialized repository");
        Ok(())
    }
}
