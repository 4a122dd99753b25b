//! Content-addressed objects
//!
//! Two kinds of objects live in the object store:
//!
//! - **Blob**: the raw bytes of one file
//! - **Commit**: a snapshot of the tracked file set plus message, timestamp and parent
//!
//! Both are serialized as `<type> <size>\0<body>` and identified by the SHA-1
//! of that serialization, so equal content always yields the same id.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
