//! Loading and storing whole area files
//!
//! Areas are always read and written as a whole: a command loads every entry
//! when the repository is opened and writes the full set back once it
//! succeeds. Writes go through a temporary file renamed over the target so a
//! crash never leaves a truncated area behind.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{AreaEntry, VERSION};
use anyhow::Context;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read every entry of an area file
///
/// A missing or empty file is an empty area.
pub fn load_entries<E: AreaEntry>(path: &Path, signature: &str) -> anyhow::Result<Vec<E>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("Unable to open area file {}", path.display()))?;

    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }

    let mut reader = Checksum::new(BufReader::new(file));
    let header = IndexHeader::read_from(&mut reader)?;
    header.check(signature)?;

    let entries = (0..header.entries_count)
        .map(|_| E::read_from(&mut reader))
        .collect::<anyhow::Result<Vec<_>>>()
        .with_context(|| format!("corrupt {} file", path.display()))?;

    reader
        .verify()
        .with_context(|| format!("corrupt {} file", path.display()))?;

    Ok(entries)
}

/// Replace the content of an area file with the given entries
pub fn store_entries<E: AreaEntry>(
    path: &Path,
    signature: &str,
    entries: &[E],
) -> anyhow::Result<()> {
    let area_dir = path
        .parent()
        .with_context(|| format!("Invalid area path {}", path.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid area path {}", path.display()))?;
    let temp_path = area_dir.join(format!("{}.lock", file_name.to_string_lossy()));

    let file = std::fs::File::create(&temp_path)
        .with_context(|| format!("Unable to open area file {}", temp_path.display()))?;
    let mut writer = Checksum::new(BufWriter::new(file));

    IndexHeader::new(signature.to_string(), VERSION, entries.len() as u32)
        .write_to(&mut writer)?;
    for entry in entries {
        entry.write_to(&mut writer)?;
    }
    writer.write_checksum()?;
    writer.into_inner().flush()?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Unable to rename area file to {}", path.display()))?;

    Ok(())
}
