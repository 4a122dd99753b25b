use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::readable_timestamp;
use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, FixedOffset};
use colored::Colorize;

impl Repository {
    /// Print the current branch's history, from HEAD back to the root commit
    pub fn log(&self) -> anyhow::Result<()> {
        let head_oid = self.refs().resolve_head()?;
        let history = self.database().history(head_oid);

        for entry in &history {
            let (commit_oid, commit) = entry?;
            self.display_commit(&commit_oid, &commit.timestamp(), commit.message())?;
        }

        Ok(())
    }

    pub fn display_commit(
        &self,
        commit_oid: &ObjectId,
        timestamp: &DateTime<FixedOffset>,
        message: &str,
    ) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "{}", format!("commit {commit_oid}").yellow())?;
        writeln!(writer, "Date: {}", readable_timestamp(timestamp))?;
        writeln!(writer, "{message}")?;
        writeln!(writer)?;

        Ok(())
    }
}
