use crate::artifacts::index::{HEADER_SIZE, VERSION};
use anyhow::anyhow;
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use derive_new::new;
use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub(crate) marker: String,
    pub(crate) version: u32,
    pub(crate) entries_count: u32,
}

impl IndexHeader {
    pub(crate) fn write_to(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        writer.write_all(self.marker.as_bytes())?;
        writer.write_u32::<NetworkEndian>(self.version)?;
        writer.write_u32::<NetworkEndian>(self.entries_count)?;

        Ok(())
    }

    pub(crate) fn read_from(reader: &mut impl Read) -> anyhow::Result<Self> {
        let mut bytes = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut bytes)
            .map_err(|_| anyhow!("Invalid header size"))?;

        let marker = String::from_utf8(bytes[0..4].to_vec())
            .map_err(|_| anyhow!("Invalid marker in area header"))?;
        let version = NetworkEndian::read_u32(&bytes[4..8]);
        let entries_count = NetworkEndian::read_u32(&bytes[8..12]);

        Ok(IndexHeader {
            marker,
            version,
            entries_count,
        })
    }

    /// Reject headers written for another area or another format version
    pub(crate) fn check(&self, marker: &str) -> anyhow::Result<()> {
        if self.marker != marker {
            return Err(anyhow!("Invalid area file signature {:?}", self.marker));
        }

        if self.version != VERSION {
            return Err(anyhow!("Unsupported area file version: {}", self.version));
        }

        Ok(())
    }
}
