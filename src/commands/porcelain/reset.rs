use crate::areas::repository::Repository;

impl Repository {
    /// Sync the working directory to a commit and move the current branch
    /// to it
    pub fn reset(&mut self, revision: &str) -> anyhow::Result<()> {
        let target_oid = self.database().resolve_commit_id(revision)?;
        let target = self.database().load_commit(&target_oid)?;

        self.sync_to(target.files())?;
        self.refs().update_head(&target_oid)?;

        self.write_updates()
    }
}
