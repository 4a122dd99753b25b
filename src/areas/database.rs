use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Shortest abbreviated commit id accepted on the command line
pub const MIN_ABBREVIATED_ID_LENGTH: usize = 4;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn history(&self, start_oid: ObjectId) -> RevList<'_> {
        RevList::new(self, start_oid)
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let location = self.location_of(object_id);

        if !location.is_file() {
            anyhow::bail!(GitletError::ObjectNotFound(object_id.to_string()));
        }

        let compressed = std::fs::read(&location)
            .with_context(|| format!("Unable to read object {}", location.display()))?;
        let mut inflated = Vec::new();
        ZlibDecoder::new(compressed.as_slice())
            .read_to_end(&mut inflated)
            .with_context(|| format!("Object {object_id} is not valid zlib data"))?;

        Ok(inflated.into())
    }

    /// Persist an object under its id and return the id
    ///
    /// Storing the same content twice is a no-op.
    pub fn store(&self, object: impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let location = self.location_of(&object_id);

        if location.is_file() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        self.persist(&location, &object.serialize()?)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.location_of(object_id).is_file()
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        let (object_type, body) = self.open_object(object_id)?;

        Ok(match object_type {
            ObjectType::Blob => Some(Blob::deserialize(body)?),
            ObjectType::Commit => None,
        })
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        let (object_type, body) = self.open_object(object_id)?;

        Ok(match object_type {
            ObjectType::Commit => Some(Commit::deserialize(body)?),
            ObjectType::Blob => None,
        })
    }

    /// Load a blob that must exist
    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        self.parse_object_as_blob(object_id)?
            .with_context(|| format!("object {object_id} is not a blob"))
    }

    /// Load a commit, reporting an unknown id as a user-facing failure
    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        if !self.contains(object_id) {
            anyhow::bail!(GitletError::UnknownCommit);
        }

        match self.parse_object_as_commit(object_id)? {
            Some(commit) => Ok(commit),
            None => anyhow::bail!(GitletError::UnknownCommit),
        }
    }

    fn location_of(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    /// Inflate an object and split its framing header from the body
    fn open_object(&self, object_id: &ObjectId) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let mut body = Cursor::new(self.load(object_id)?);
        let object_type = ObjectType::parse_object_type(&mut body)?;

        Ok((object_type, body))
    }

    /// Deflate `content` into a sibling temp file, then rename it into place
    fn persist(&self, location: &Path, content: &[u8]) -> anyhow::Result<()> {
        let fan_out_dir = location
            .parent()
            .with_context(|| format!("Object path {} has no parent", location.display()))?;
        std::fs::create_dir_all(fan_out_dir)
            .with_context(|| format!("Unable to create {}", fan_out_dir.display()))?;

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content)?;
        let deflated = encoder.finish().context("Unable to deflate object")?;

        let staging_path = fan_out_dir.join(format!("tmp-obj-{}", rand::random::<u32>()));
        std::fs::write(&staging_path, deflated)
            .with_context(|| format!("Unable to write {}", staging_path.display()))?;
        std::fs::rename(&staging_path, location)
            .with_context(|| format!("Unable to move object into {}", location.display()))?;

        Ok(())
    }

    /// Find all objects whose id starts with the given prefix
    ///
    /// An empty vector means nothing matched; more than one match means the
    /// prefix is ambiguous. Prefixes of 2+ characters only scan the matching
    /// fan-out directory.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let mut matches = Vec::new();

        if !prefix.is_ascii() {
            return Ok(matches);
        }

        let dir_names = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        for dir_name in dir_names {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let full_oid = format!("{}{}", dir_name, entry.file_name().to_string_lossy());

                if full_oid.starts_with(&prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    pub fn get_object_type(&self, object_id: &ObjectId) -> anyhow::Result<ObjectType> {
        self.open_object(object_id).map(|(object_type, _)| object_type)
    }

    /// Resolve a full or abbreviated commit id typed by the user
    ///
    /// Blobs sharing the prefix are ignored. Anything that does not lead to
    /// exactly one commit fails with `UnknownCommit`, except a prefix naming
    /// several commits, which fails with `AmbiguousCommitId`.
    pub fn resolve_commit_id(&self, revision: &str) -> anyhow::Result<ObjectId> {
        let revision = revision.trim();

        if revision.len() < MIN_ABBREVIATED_ID_LENGTH
            || revision.len() > OBJECT_ID_LENGTH
            || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            anyhow::bail!(GitletError::UnknownCommit);
        }

        let candidates = self
            .find_objects_by_prefix(revision)?
            .into_iter()
            .filter(|oid| matches!(self.get_object_type(oid), Ok(ObjectType::Commit)))
            .collect::<Vec<_>>();

        match candidates.as_slice() {
            [] => anyhow::bail!(GitletError::UnknownCommit),
            [oid] => Ok(oid.clone()),
            _ => anyhow::bail!(GitletError::AmbiguousCommitId(revision.to_string())),
        }
    }
}
