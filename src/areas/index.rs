//! Staging area
//!
//! Maps paths to the blob recorded by `add`, waiting for the next commit.
//!
//! ## Invariant
//!
//! An entry never repeats what HEAD already tracks: staging a blob equal to
//! HEAD's version of the path drops the pending entry instead.

use crate::artifacts::index::area_file::{load_entries, store_entries};
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::INDEX_SIGNATURE;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.gitlet/index`)
    path: Box<Path>,
    entries: BTreeMap<PathBuf, ObjectId>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries = load_entries::<IndexEntry>(&self.path, INDEX_SIGNATURE)?
            .into_iter()
            .map(|entry| (entry.name, entry.oid))
            .collect();
        self.changed = false;

        Ok(())
    }

    /// Persist the staging area if it was modified since it was loaded
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let entries = self
            .entries
            .iter()
            .map(|(name, oid)| IndexEntry::new(name.clone(), oid.clone()))
            .collect::<Vec<_>>();
        store_entries(&self.path, INDEX_SIGNATURE, &entries)?;
        self.changed = false;

        tracing::debug!(entries = entries.len(), "wrote staging area");
        Ok(())
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    /// Read-only view of the pending entries
    pub fn snapshot(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.entries
    }

    /// Record `oid` as the next content of `path`
    ///
    /// When `tracked` (HEAD's blob for the path) equals `oid`, any pending
    /// entry is dropped instead. Returns whether the path ends up staged.
    pub fn stage(&mut self, path: &Path, oid: ObjectId, tracked: Option<&ObjectId>) -> bool {
        if tracked == Some(&oid) {
            if self.entries.remove(path).is_some() {
                tracing::debug!(path = %path.display(), "dropped pending entry matching HEAD");
                self.changed = true;
            }
            return false;
        }

        if self.entries.get(path) != Some(&oid) {
            tracing::debug!(path = %path.display(), %oid, "staged");
            self.entries.insert(path.to_path_buf(), oid);
            self.changed = true;
        }

        true
    }

    /// Returns whether the path was staged
    pub fn unstage(&mut self, path: &Path) -> bool {
        let removed = self.entries.remove(path).is_some();
        self.changed |= removed;

        removed
    }

    pub fn clear_all(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.changed = true;
        }
    }

    /// Apply the pending entries on top of a commit's file map
    pub fn overlay(&self, files: &mut FileMap) {
        files.extend(
            self.entries
                .iter()
                .map(|(path, oid)| (path.clone(), oid.clone())),
        );
    }
}
