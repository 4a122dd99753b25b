//! Binary area files
//!
//! The staging area, the removal marks and the commit log are each persisted
//! as one binary file sharing the same framing:
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: 4 ASCII bytes identifying the area
//!   - Version: 1 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length)
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! Paths inside entries are written as a big-endian `u16` length followed by
//! the UTF-8 bytes of the path.

pub mod area_file;
pub mod checksum;
pub mod index_entry;
pub mod index_header;

use anyhow::Context;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of the area header in bytes
pub const HEADER_SIZE: usize = 12; // 4 bytes for marker, 4 for version, 4 for entries_count

/// Signature of the staging area file
pub const INDEX_SIGNATURE: &str = "STAG";

/// Signature of the removal marks file
pub const REMOVALS_SIGNATURE: &str = "RMRK";

/// Signature of the commit log file
pub const JOURNAL_SIGNATURE: &str = "JRNL";

/// Area file format version
pub const VERSION: u32 = 1;

/// Longest path an entry can carry
pub const MAX_PATH_SIZE: usize = u16::MAX as usize;

/// An entry that can be streamed in and out of an area file
pub trait AreaEntry: Sized {
    fn read_from(reader: &mut impl Read) -> anyhow::Result<Self>;

    fn write_to(&self, writer: &mut impl Write) -> anyhow::Result<()>;
}

pub(crate) fn write_path(path: &Path, writer: &mut impl Write) -> anyhow::Result<()> {
    let name = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid entry name {:?}", path))?;

    if name.len() > MAX_PATH_SIZE {
        anyhow::bail!("Entry name too long: {}", name);
    }

    writer.write_u16::<NetworkEndian>(name.len() as u16)?;
    writer.write_all(name.as_bytes())?;

    Ok(())
}

pub(crate) fn read_path(reader: &mut impl Read) -> anyhow::Result<PathBuf> {
    let name_len = reader
        .read_u16::<NetworkEndian>()
        .context("Unexpected end-of-file while reading entry name")?;

    let mut name = vec![0; name_len as usize];
    reader
        .read_exact(&mut name)
        .context("Unexpected end-of-file while reading entry name")?;

    let name =
        String::from_utf8(name).map_err(|_| anyhow::anyhow!("Invalid UTF-8 in entry name"))?;
    Ok(PathBuf::from(name))
}
