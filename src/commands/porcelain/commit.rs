use crate::areas::repository::Repository;
use crate::artifacts::log::journal_entry::JournalEntry;
use crate::artifacts::objects::commit::{Commit, load_timestamp_from_env};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.write_commit(message)?;
        self.write_updates()
    }

    /// Record HEAD's snapshot minus the removal marks, overlaid with the
    /// staging area, and advance the current branch to it
    ///
    /// Both pending areas are cleared and the commit is appended to the
    /// journal. Nothing is persisted besides the new objects and the branch
    /// pointer; callers finish with [`Repository::write_updates`].
    pub fn write_commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        if message.is_empty() {
            anyhow::bail!(GitletError::MissingMessage);
        }
        if !self.has_pending_changes() {
            anyhow::bail!(GitletError::NoChanges);
        }

        let (head_oid, head) = self.head_commit()?;
        let mut files = head.into_files();
        self.removals().apply(&mut files);
        self.index().overlay(&mut files);

        let timestamp = load_timestamp_from_env()?;
        let commit = Commit::new(Some(head_oid), timestamp, message.to_string(), files);
        let commit_oid = self.database().store(commit)?;
        self.refs().update_head(&commit_oid)?;

        self.index_mut().clear_all();
        self.removals_mut().clear_all();
        self.journal_mut().append(JournalEntry::new(
            commit_oid.clone(),
            timestamp,
            message.to_string(),
        ));

        tracing::info!(oid = %commit_oid, "created commit");
        Ok(commit_oid)
    }
}
