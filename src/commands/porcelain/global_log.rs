use crate::areas::repository::Repository;

impl Repository {
    /// Print every commit ever made, on any branch, newest first
    pub fn global_log(&self) -> anyhow::Result<()> {
        for entry in self.journal().entries().iter().rev() {
            self.display_commit(&entry.oid, &entry.timestamp, &entry.message)?;
        }

        Ok(())
    }
}
