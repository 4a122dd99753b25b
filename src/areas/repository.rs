use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::journal::Journal;
use crate::areas::refs::Refs;
use crate::areas::removals::Removals;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use crate::errors::GitletError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory at the repository root
pub const GITLET_DIR: &str = ".gitlet";

/// One repository rooted at a directory
///
/// Every area is loaded once when the repository is opened and mutated in
/// memory; [`Repository::write_updates`] persists the modified ones when a
/// command succeeds.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    index: Index,
    removals: Removals,
    journal: Journal,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Bind to a directory without reading anything from it
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to access {}", path.display()))?;
        let gitlet_path = path.join(GITLET_DIR);

        Ok(Repository {
            writer: RefCell::new(writer),
            database: Database::new(gitlet_path.join("objects").into_boxed_path()),
            index: Index::new(gitlet_path.join("index").into_boxed_path()),
            removals: Removals::new(gitlet_path.join("removals").into_boxed_path()),
            journal: Journal::new(gitlet_path.join("journal").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(gitlet_path.into_boxed_path()),
            path: path.into_boxed_path(),
        })
    }

    /// Bind to an initialized repository and load its areas
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let mut repository = Self::new(path, writer)?;

        if !repository.is_initialized() {
            anyhow::bail!(GitletError::NotInitialized);
        }
        repository.rehydrate()?;

        Ok(repository)
    }

    pub fn is_initialized(&self) -> bool {
        self.gitlet_path().is_dir()
    }

    fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.index.rehydrate()?;
        self.removals.rehydrate()?;
        self.journal.rehydrate()?;

        Ok(())
    }

    /// Persist every area modified by the current command
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        self.index.write_updates()?;
        self.removals.write_updates()?;
        self.journal.write_updates()?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> Box<Path> {
        self.path.join(GITLET_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn removals(&self) -> &Removals {
        &self.removals
    }

    pub fn removals_mut(&mut self) -> &mut Removals {
        &mut self.removals
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut Journal {
        &mut self.journal
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        Status::new(self).initialize()
    }

    /// The commit the current branch points at
    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let head_oid = self.refs.resolve_head()?;
        let commit = self
            .database
            .parse_object_as_commit(&head_oid)?
            .with_context(|| format!("HEAD points at {head_oid}, which is not a commit"))?;

        Ok((head_oid, commit))
    }

    /// Whether any add or rm is waiting for the next commit
    pub fn has_pending_changes(&self) -> bool {
        !self.index.is_empty() || !self.removals.is_empty()
    }
}
