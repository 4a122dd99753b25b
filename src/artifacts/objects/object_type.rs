use anyhow::Context;
use std::io::BufRead;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Consume the `<type> <size>\0` header, leaving the reader at the body
    pub fn parse_object_type(reader: &mut impl BufRead) -> anyhow::Result<ObjectType> {
        let mut header = Vec::new();
        reader.read_until(b'\0', &mut header)?;

        let header = std::str::from_utf8(&header)?.trim_end_matches('\0');
        let (kind, size) = header
            .split_once(' ')
            .with_context(|| format!("Malformed object header {header:?}"))?;
        size.parse::<usize>()
            .with_context(|| format!("Malformed object size {size:?}"))?;

        kind.parse()
    }
}

impl FromStr for ObjectType {
    type Err = anyhow::Error;

    fn from_str(kind: &str) -> anyhow::Result<Self> {
        match kind {
            "blob" => Ok(ObjectType::Blob),
            "commit" => Ok(ObjectType::Commit),
            other => anyhow::bail!("Unknown object type {other:?}"),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
