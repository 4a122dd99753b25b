use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::path::Path;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Id the working file would get as a blob, None when it is missing
    pub fn workspace_oid(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        if !self.repository.workspace().file_exists(path) {
            return Ok(None);
        }

        let blob = self.repository.workspace().parse_blob(path)?;
        Ok(Some(blob.object_id()?))
    }

    /// Compare a path across the staging area, HEAD and the working directory
    ///
    /// The staged blob wins over HEAD's when both exist. A path marked for
    /// removal is only reported again if it reappears on disk, as untracked.
    pub fn check_workspace_change(
        &self,
        path: &Path,
        head: &Commit,
    ) -> anyhow::Result<WorkspaceChangeType> {
        let working_oid = self.workspace_oid(path)?;
        let staged_oid = self.repository.index().entry_by_path(path);
        let marked = self.repository.removals().contains(path);

        let expected_oid = match (staged_oid, head.blob_for(path)) {
            (Some(staged_oid), _) => staged_oid,
            (None, Some(_)) if marked => {
                return Ok(match working_oid {
                    Some(_) => WorkspaceChangeType::Untracked,
                    None => WorkspaceChangeType::None,
                });
            }
            (None, Some(head_oid)) => head_oid,
            (None, None) => {
                return Ok(match working_oid {
                    Some(_) => WorkspaceChangeType::Untracked,
                    None => WorkspaceChangeType::None,
                });
            }
        };

        Ok(match working_oid {
            None => WorkspaceChangeType::Deleted,
            Some(working_oid) if &working_oid != expected_oid => WorkspaceChangeType::Modified,
            Some(_) => WorkspaceChangeType::None,
        })
    }
}
