use crate::areas::repository::Repository;
use crate::errors::GitletError;
use std::path::Path;

impl Repository {
    /// Unstage a file; if HEAD tracks it, also mark it for removal and delete
    /// it from the working directory
    pub fn rm(&mut self, path: &Path) -> anyhow::Result<()> {
        let path = self.workspace().normalize(path)?;
        let (_, head) = self.head_commit()?;

        let tracked = head.tracks(&path);
        if !tracked && !self.index().contains(&path) {
            anyhow::bail!(GitletError::NoReasonToRemove);
        }

        self.index_mut().unstage(&path);
        if tracked {
            self.removals_mut().mark(&path);
            self.workspace().remove_file(&path)?;
        }

        self.write_updates()
    }
}
