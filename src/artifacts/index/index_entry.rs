//! Entries of the staging area and removal marks files
//!
//! A staged entry pairs a path with the blob recorded by `add`; a removal
//! entry is just the path scheduled to disappear at the next commit.

use crate::artifacts::index::{AreaEntry, read_path, write_path};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Path staged for the next commit along with its blob
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub name: PathBuf,
    /// Blob holding the staged content
    pub oid: ObjectId,
}

impl AreaEntry for IndexEntry {
    fn read_from(reader: &mut impl Read) -> anyhow::Result<Self> {
        let oid = ObjectId::read_raw_from(reader)?;
        let name = read_path(reader)?;

        Ok(IndexEntry { name, oid })
    }

    fn write_to(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        self.oid.write_raw_to(writer)?;
        write_path(&self.name, writer)
    }
}

/// Path marked for removal at the next commit
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct RemovalEntry {
    pub name: PathBuf,
}

impl AreaEntry for RemovalEntry {
    fn read_from(reader: &mut impl Read) -> anyhow::Result<Self> {
        Ok(RemovalEntry {
            name: read_path(reader)?,
        })
    }

    fn write_to(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        write_path(&self.name, writer)
    }
}
