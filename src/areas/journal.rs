//! Commit log
//!
//! Every commit created in the repository, on any branch, in creation order.
//! `global-log` and `find` read it since the commit graph itself can only be
//! walked backwards from a known head.

use crate::artifacts::index::area_file::{load_entries, store_entries};
use crate::artifacts::index::JOURNAL_SIGNATURE;
use crate::artifacts::log::journal_entry::JournalEntry;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Journal {
    path: Box<Path>,
    entries: Vec<JournalEntry>,
    changed: bool,
}

impl Journal {
    pub fn new(path: Box<Path>) -> Self {
        Journal {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries = load_entries(&self.path, JOURNAL_SIGNATURE)?;
        self.changed = false;

        Ok(())
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        store_entries(&self.path, JOURNAL_SIGNATURE, &self.entries)?;
        self.changed = false;

        Ok(())
    }

    pub fn append(&mut self, entry: JournalEntry) {
        tracing::debug!(oid = %entry.oid, "appended commit to journal");
        self.entries.push(entry);
        self.changed = true;
    }

    /// Entries in creation order
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Ids of the commits whose message satisfies the predicate, newest first
    pub fn find_by_message(&self, predicate: impl Fn(&str) -> bool) -> Vec<ObjectId> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| predicate(&entry.message))
            .map(|entry| entry.oid.clone())
            .collect()
    }
}
