//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings. They identify blobs and
//! commits alike.
//!
//! ## Storage
//!
//! Objects are stored in `.gitlet/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::io;
use std::path::PathBuf;

/// Length of the binary form of an id
pub const RAW_ID_LENGTH: usize = OBJECT_ID_LENGTH / 2;

const SHORT_ID_LENGTH: usize = 7;

/// Validated, lowercase 40-digit SHA-1 hex string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Validate a 40-digit hexadecimal id
    ///
    /// Uppercase digits are folded to lowercase so that ids typed by the user
    /// match the ones produced by the hasher.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        anyhow::ensure!(
            id.len() == OBJECT_ID_LENGTH && id.bytes().all(|b| b.is_ascii_hexdigit()),
            "{id:?} is not a {OBJECT_ID_LENGTH}-digit hexadecimal object id"
        );

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// The 20 raw bytes the id encodes
    pub fn to_raw(&self) -> anyhow::Result<[u8; RAW_ID_LENGTH]> {
        let mut raw = [0u8; RAW_ID_LENGTH];
        for (byte, pair) in raw.iter_mut().zip(self.0.as_bytes().chunks(2)) {
            *byte = u8::from_str_radix(std::str::from_utf8(pair)?, 16)?;
        }

        Ok(raw)
    }

    /// Write the id in its raw form, as area files store it
    pub fn write_raw_to(&self, writer: &mut impl io::Write) -> anyhow::Result<()> {
        writer.write_all(&self.to_raw()?)?;
        Ok(())
    }

    pub fn read_raw_from<R: io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<Self> {
        let mut raw = [0u8; RAW_ID_LENGTH];
        reader.read_exact(&mut raw)?;

        Self::try_parse(raw.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    /// Location under the objects directory: `xx/yyyy...`
    pub fn to_path(&self) -> PathBuf {
        let (fan_out, rest) = self.0.split_at(2);
        [fan_out, rest].iter().collect()
    }

    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_ID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
