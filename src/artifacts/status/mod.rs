//! Working tree status inspection
//!
//! - `file_change`: Kinds of unstaged change
//! - `inspector`: Compares one path across HEAD, the staging area and the
//!   working directory
//! - `status_info`: Collects the five sections printed by `status`

pub mod file_change;
pub mod inspector;
pub mod status_info;
