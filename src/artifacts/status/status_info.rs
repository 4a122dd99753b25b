use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub(crate) current_branch: BranchName,
    /// Every branch, sorted, the current one included
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    /// Unstaged modifications and deletions
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl StatusInfo {
    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn branches(&self) -> &[BranchName] {
        &self.branches
    }

    pub fn staged_files(&self) -> &FileSet {
        &self.staged_files
    }

    pub fn removed_files(&self) -> &FileSet {
        &self.removed_files
    }

    pub fn workspace_changeset(&self) -> &ChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked_files(&self) -> &FileSet {
        &self.untracked_files
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let (_, head) = self.repository.head_commit()?;
        let inspector = Inspector::new(self.repository);

        // every path known to at least one of the three trees
        let candidates = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .chain(self.repository.index().paths().cloned())
            .chain(head.files().keys().cloned())
            .collect::<FileSet>();

        let mut workspace_changeset = ChangeSet::new();
        let mut untracked_files = FileSet::new();

        for path in candidates {
            match inspector.check_workspace_change(&path, &head)? {
                WorkspaceChangeType::None => {}
                WorkspaceChangeType::Untracked => {
                    untracked_files.insert(path);
                }
                change => {
                    workspace_changeset.insert(path, change);
                }
            }
        }

        Ok(StatusInfo {
            current_branch: self.repository.refs().current_branch()?,
            branches: self.repository.refs().list_branches()?,
            staged_files: self.repository.index().paths().cloned().collect(),
            removed_files: self.repository.removals().iter().cloned().collect(),
            workspace_changeset,
            untracked_files,
        })
    }
}
