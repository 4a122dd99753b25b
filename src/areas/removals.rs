//! Removal marks
//!
//! Paths scheduled by `rm` to be dropped from tracking at the next commit.

use crate::artifacts::index::area_file::{load_entries, store_entries};
use crate::artifacts::index::index_entry::RemovalEntry;
use crate::artifacts::index::REMOVALS_SIGNATURE;
use crate::artifacts::objects::commit::FileMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Removals {
    /// Path to the marks file (typically `.gitlet/removals`)
    path: Box<Path>,
    marks: BTreeSet<PathBuf>,
    changed: bool,
}

impl Removals {
    pub fn new(path: Box<Path>) -> Self {
        Removals {
            path,
            marks: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.marks = load_entries::<RemovalEntry>(&self.path, REMOVALS_SIGNATURE)?
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        self.changed = false;

        Ok(())
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let entries = self
            .marks
            .iter()
            .cloned()
            .map(RemovalEntry::new)
            .collect::<Vec<_>>();
        store_entries(&self.path, REMOVALS_SIGNATURE, &entries)?;
        self.changed = false;

        tracing::debug!(marks = entries.len(), "wrote removal marks");
        Ok(())
    }

    pub fn mark(&mut self, path: &Path) {
        if self.marks.insert(path.to_path_buf()) {
            tracing::debug!(path = %path.display(), "marked for removal");
            self.changed = true;
        }
    }

    /// Returns whether the path was marked
    pub fn unmark(&mut self, path: &Path) -> bool {
        let removed = self.marks.remove(path);
        self.changed |= removed;

        removed
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.marks.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.marks.iter()
    }

    pub fn clear_all(&mut self) {
        if !self.marks.is_empty() {
            self.marks.clear();
            self.changed = true;
        }
    }

    /// Drop the marked paths from a commit's file map
    pub fn apply(&self, files: &mut FileMap) {
        files.retain(|path, _| !self.marks.contains(path));
    }
}
