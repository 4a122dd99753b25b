use crate::areas::repository::Repository;
use crate::errors::GitletError;

impl Repository {
    /// Print the id of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let matches = self
            .journal()
            .find_by_message(|candidate| candidate == message);

        if matches.is_empty() {
            anyhow::bail!(GitletError::NoMatchingCommit);
        }

        let mut writer = self.writer();
        for commit_oid in matches {
            writeln!(writer, "{commit_oid}")?;
        }

        Ok(())
    }
}
