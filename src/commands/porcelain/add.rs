use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::errors::GitletError;
use std::path::Path;

impl Repository {
    /// Stage the current content of a file
    ///
    /// A file marked for removal is unmarked instead, and nothing is staged.
    pub fn add(&mut self, path: &Path) -> anyhow::Result<()> {
        let path = self.workspace().normalize(path)?;

        if !self.workspace().file_exists(&path) {
            anyhow::bail!(GitletError::FileDoesNotExist);
        }

        if self.removals_mut().unmark(&path) {
            return self.write_updates();
        }

        let (_, head) = self.head_commit()?;
        let blob = self.workspace().parse_blob(&path)?;
        let blob_oid = blob.object_id()?;
        let tracked_oid = head.blob_for(&path);

        if tracked_oid != Some(&blob_oid) {
            self.database().store(blob)?;
        }
        self.index_mut().stage(&path, blob_oid, tracked_oid);

        self.write_updates()
    }
}
