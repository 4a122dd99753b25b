//! Branch names
//!
//! Branches are stored as files under `.gitlet/refs/heads/`, so their names
//! follow the same restrictions git puts on ref names.

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";
