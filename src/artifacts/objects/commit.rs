//! Commit object
//!
//! Commits are immutable snapshots of the tracked file set. Each one records:
//! - At most one parent commit ID (the root commit has none)
//! - The commit timestamp with its timezone offset
//! - The file map: every tracked path and the blob holding its content
//! - The commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! timestamp <unix-seconds> <timezone>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! File lines are written in path order, so the same snapshot always
//! serializes to the same bytes and therefore to the same ID.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Tracked paths mapped to the blob holding their content
pub type FileMap = BTreeMap<PathBuf, ObjectId>;

/// Message of the root commit created by `init`
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Environment variable overriding the timestamp of new commits
pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";

const READABLE_TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit ID (None for the root commit)
    parent: Option<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    message: String,
    files: FileMap,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        message: String,
        files: FileMap,
    ) -> Self {
        Commit {
            parent,
            timestamp,
            message,
            files,
        }
    }

    /// The commit every repository starts from: no parent, no files, dated at
    /// the Unix epoch in UTC
    pub fn root() -> Self {
        let epoch = DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset();

        Commit::new(None, epoch, INITIAL_COMMIT_MESSAGE.to_string(), FileMap::new())
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn into_files(self) -> FileMap {
        self.files
    }

    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.files.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Timestamp in the form `Thu Jan 1 00:00:00 1970 +0000`
    pub fn readable_timestamp(&self) -> String {
        readable_timestamp(&self.timestamp)
    }
}

pub fn readable_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(READABLE_TIMESTAMP_FORMAT).to_string()
}

/// Timestamp for a new commit
///
/// Reads `GITLET_COMMIT_DATE` (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`) and falls
/// back to the current local time.
pub fn load_timestamp_from_env() -> anyhow::Result<DateTime<FixedOffset>> {
    match std::env::var(COMMIT_DATE_ENV) {
        Ok(date_str) => DateTime::parse_from_rfc2822(&date_str)
            .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
            .with_context(|| format!("invalid {COMMIT_DATE_ENV} value: {date_str}")),
        Err(_) => Ok(chrono::Local::now().fixed_offset()),
    }
}

fn parse_timestamp(seconds: &str, timezone: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let seconds = seconds
        .parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Invalid timestamp"))?;

    if timezone.len() != 5
        || !timezone.is_ascii()
        || !timezone[1..].chars().all(|c| c.is_ascii_digit())
    {
        anyhow::bail!("Invalid timezone {timezone}");
    }
    let sign = match &timezone[..1] {
        "+" => 1,
        "-" => -1,
        _ => anyhow::bail!("Invalid timezone {timezone}"),
    };
    let hours = timezone[1..3].parse::<i32>()?;
    let minutes = timezone[3..5].parse::<i32>()?;
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| anyhow::anyhow!("Invalid timezone {timezone}"))?;

    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid timestamp"))?;

    Ok(utc.with_timezone(&offset))
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, oid) in &self.files {
            let path = path
                .to_str()
                .filter(|path| !path.contains(['\n', '\r']))
                .ok_or_else(|| anyhow::anyhow!("Invalid file path {:?}", path))?;
            object_content.push(format!("file {} {}", oid.as_ref(), path));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        Ok(frame(self.object_type(), object_content.as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: body is not UTF-8")?;

        // the message may span several lines, the header never has blank ones
        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parent = None;
        let mut timestamp = None;
        let mut files = FileMap::new();

        for line in header.lines() {
            if let Some(parent_oid) = line.strip_prefix("parent ") {
                parent = Some(ObjectId::try_parse(parent_oid.to_string())?);
            } else if let Some(timestamp_line) = line.strip_prefix("timestamp ") {
                let (seconds, timezone) = timestamp_line
                    .split_once(' ')
                    .context("Invalid commit object: invalid timestamp line")?;
                timestamp = Some(parse_timestamp(seconds, timezone)?);
            } else if let Some(file_line) = line.strip_prefix("file ") {
                let (oid, path) = file_line
                    .split_once(' ')
                    .context("Invalid commit object: invalid file line")?;
                files.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing timestamp line")?;

        Ok(Self::new(parent, timestamp, message.to_string(), files))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
