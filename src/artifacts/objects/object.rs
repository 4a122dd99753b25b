use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// Anything the object store can hold
pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// SHA-1 of the framed serialization
    fn object_id(&self) -> Result<ObjectId> {
        let digest = Sha1::digest(self.serialize()?);
        ObjectId::try_parse(format!("{digest:x}"))
    }
}

/// Prefix the body with the `<type> <size>\0` header shared by all objects
pub(crate) fn frame(object_type: ObjectType, body: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), body.len());

    let mut object_bytes = Vec::with_capacity(header.len() + body.len());
    object_bytes.extend_from_slice(header.as_bytes());
    object_bytes.extend_from_slice(body);

    Bytes::from(object_bytes)
}
