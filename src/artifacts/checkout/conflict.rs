use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use derive_new::new;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::path::{Path, PathBuf};

/// File names the guard never reports, wherever they live
const IGNORED_FILE_NAMES: [&str; 1] = [".DS_Store"];

/// Refuses a sync that would overwrite a file the repository knows nothing
/// about
///
/// A working file is in the way when neither HEAD nor the staging area
/// tracks it and the target snapshot needs its spot on disk: the target
/// tracks its path, tracks a path below it, or tracks a path above it that
/// must become a file.
#[derive(Debug, new)]
pub struct UntrackedGuard<'a> {
    head_files: &'a FileMap,
    staged: &'a BTreeMap<PathBuf, ObjectId>,
}

impl UntrackedGuard<'_> {
    pub fn files_in_the_way(&self, working_files: &[PathBuf], target: &FileMap) -> Vec<PathBuf> {
        working_files
            .iter()
            .filter(|path| !self.is_tracked(path))
            .filter(|path| {
                (target.contains_key(*path) && !Self::is_ignored(path))
                    || Self::blocks_directory(path, target)
                    || Self::occupies_directory(path, target)
            })
            .cloned()
            .collect()
    }

    pub fn check(&self, working_files: &[PathBuf], target: &FileMap) -> anyhow::Result<()> {
        let in_the_way = self.files_in_the_way(working_files, target);

        if !in_the_way.is_empty() {
            tracing::debug!(files = ?in_the_way, "untracked files would be overwritten");
            anyhow::bail!(GitletError::UntrackedFileInTheWay);
        }

        Ok(())
    }

    fn is_tracked(&self, path: &Path) -> bool {
        self.head_files.contains_key(path) || self.staged.contains_key(path)
    }

    /// The file sits where the target needs a directory
    fn blocks_directory(path: &Path, target: &FileMap) -> bool {
        target
            .range::<Path, _>((Bound::Excluded(path), Bound::Unbounded))
            .next()
            .is_some_and(|(target_path, _)| target_path.starts_with(path))
    }

    /// The file lives inside a directory the target replaces with a file
    fn occupies_directory(path: &Path, target: &FileMap) -> bool {
        path.ancestors()
            .skip(1)
            .any(|ancestor| target.contains_key(ancestor))
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| IGNORED_FILE_NAMES.contains(&name.to_string_lossy().as_ref()))
    }
}
