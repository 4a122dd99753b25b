use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;
use std::path::PathBuf;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let status_info = self.status_info()?;

        self.print_branches(&status_info)?;
        self.print_section("Staged Files", status_info.staged_files().iter())?;
        self.print_section("Removed Files", status_info.removed_files().iter())?;
        self.print_changes(&status_info)?;
        self.print_section("Untracked Files", status_info.untracked_files().iter())?;

        Ok(())
    }

    fn print_branches(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        writeln!(writer, "*{}", status_info.current_branch())?;
        for branch in status_info
            .branches()
            .iter()
            .filter(|branch| *branch != status_info.current_branch())
        {
            writeln!(writer, "{branch}")?;
        }
        writeln!(writer)?;

        Ok(())
    }

    fn print_changes(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in status_info.workspace_changeset() {
            writeln!(writer, "{} {}", path.display(), change)?;
        }
        writeln!(writer)?;

        Ok(())
    }

    fn print_section<'p>(
        &self,
        title: &str,
        paths: impl Iterator<Item = &'p PathBuf>,
    ) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "=== {title} ===")?;
        for path in paths {
            writeln!(writer, "{}", path.display())?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
