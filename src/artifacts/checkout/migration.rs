use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::UntrackedGuard;
use crate::artifacts::objects::commit::FileMap;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Plan for replacing the working directory content with a snapshot
///
/// [`Migration::plan_changes`] validates and loads everything up front;
/// [`Migration::update_workspace`] then deletes every staged and every
/// HEAD-tracked file before writing the target files.
pub struct Migration<'r> {
    repository: &'r Repository,
    target: &'r FileMap,
    /// Paths to delete: staged ones first, then the ones tracked by HEAD
    deletions: BTreeSet<PathBuf>,
    /// Target files with their content
    writes: Vec<(PathBuf, Bytes)>,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, target: &'r FileMap) -> Self {
        Migration {
            repository,
            target,
            deletions: BTreeSet::new(),
            writes: Vec::new(),
        }
    }

    pub fn deletions(&self) -> &BTreeSet<PathBuf> {
        &self.deletions
    }

    pub fn writes(&self) -> &[(PathBuf, Bytes)] {
        &self.writes
    }

    /// Run the untracked-file guard and load the target blobs
    ///
    /// Nothing is written; an error here leaves every area untouched.
    pub fn plan_changes(&mut self) -> anyhow::Result<()> {
        let (_, head) = self.repository.head_commit()?;
        let staged = self.repository.index().snapshot();
        let working_files = self.repository.workspace().list_files()?;

        UntrackedGuard::new(head.files(), staged).check(&working_files, self.target)?;

        self.deletions = staged.keys().chain(head.files().keys()).cloned().collect();
        self.writes = self
            .target
            .iter()
            .map(|(path, oid)| {
                let blob = self.repository.database().load_blob(oid)?;
                Ok((path.clone(), blob.into_content()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        tracing::debug!(
            deletions = self.deletions.len(),
            writes = self.writes.len(),
            "planned working directory sync"
        );
        Ok(())
    }

    pub fn update_workspace(&self) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();

        for path in &self.deletions {
            workspace.remove_file(path)?;
        }
        for (path, content) in &self.writes {
            workspace.write_file(path, content)?;
        }

        Ok(())
    }
}
