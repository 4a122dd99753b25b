use crate::artifacts::index::AreaEntry;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::io::{Read, Write};

/// One record of the commit log
///
/// The log is kept apart from the commit graph: it lists every commit ever
/// made in this repository, on any branch, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct JournalEntry {
    pub oid: ObjectId,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
}

impl AreaEntry for JournalEntry {
    fn read_from(reader: &mut impl Read) -> anyhow::Result<Self> {
        let oid = ObjectId::read_raw_from(reader)?;
        let seconds = reader.read_i64::<NetworkEndian>()?;
        let offset = reader.read_i32::<NetworkEndian>()?;
        let message_len = reader.read_u32::<NetworkEndian>()?;

        let mut message = vec![0; message_len as usize];
        reader
            .read_exact(&mut message)
            .context("Unexpected end-of-file while reading commit message")?;
        let message = String::from_utf8(message)?;

        let offset = FixedOffset::east_opt(offset)
            .ok_or_else(|| anyhow::anyhow!("Invalid timezone offset {offset}"))?;
        let timestamp = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid timestamp {seconds}"))?
            .with_timezone(&offset);

        Ok(JournalEntry {
            oid,
            timestamp,
            message,
        })
    }

    fn write_to(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        self.oid.write_raw_to(writer)?;
        writer.write_i64::<NetworkEndian>(self.timestamp.timestamp())?;
        writer.write_i32::<NetworkEndian>(self.timestamp.offset().local_minus_utc())?;
        writer.write_u32::<NetworkEndian>(self.message.len() as u32)?;
        writer.write_all(self.message.as_bytes())?;

        Ok(())
    }
}
